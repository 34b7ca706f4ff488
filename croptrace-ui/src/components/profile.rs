//! Profile editor modal

use croptrace::ProfileForm;
use leptos::*;

use super::form_field::TextField;
use crate::state::use_app_context;

#[component]
pub fn ProfileModal(on_close: impl Fn() + 'static + Clone) -> impl IntoView {
    let ctx = use_app_context();

    let initial = ctx
        .user
        .with_untracked(|u| u.as_ref().map(ProfileForm::from_user))
        .unwrap_or_default();

    let name = create_rw_signal(initial.name);
    let email = create_rw_signal(initial.email);
    let phone = create_rw_signal(initial.phone);
    let location = create_rw_signal(initial.location);
    let (error, set_error) = create_signal(None::<String>);

    // Clone on_close for each place it's used
    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(current) = ctx.user.get_untracked() else {
            on_close_for_submit();
            return;
        };

        let form = ProfileForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            location: location.get_untracked(),
        };

        match form.apply(&current) {
            Ok(updated) => {
                ctx.update_user(updated);
                on_close_for_submit();
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white dark:bg-gray-800 rounded-2xl p-6 w-full max-w-md mx-4 shadow-xl animate-fade-in">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold text-emerald-900 dark:text-emerald-100">"Edit Profile"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-gray-700 dark:hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <TextField label="Name" value=name />
                    <TextField label="Email" value=email input_type="email" />
                    <TextField label="Phone" value=phone input_type="tel" />
                    <TextField label="Location" value=location />

                    {move || error.get().map(|msg| view! {
                        <p class="text-sm text-red-600 dark:text-red-400">{msg}</p>
                    })}

                    <div class="flex justify-end space-x-3 pt-2">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            class="px-4 py-2 rounded-xl border border-emerald-200 dark:border-gray-600 text-emerald-700 dark:text-emerald-200"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 rounded-xl bg-emerald-600 hover:bg-emerald-700 text-white font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
