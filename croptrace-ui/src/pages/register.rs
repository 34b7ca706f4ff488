//! Registration page

use croptrace::{RegisterForm, Role};
use leptos::*;
use leptos_router::A;

use crate::components::{AuthLayout, RoleSelect, TextField};
use crate::state::use_app_context;

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let role = create_rw_signal(Role::Farmer);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            location: location.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            role: role.get_untracked(),
        };

        match form.into_user() {
            Ok(user) => {
                tracing::info!("Registered {}", user.name);
                ctx.login(user);
                ctx.show_success("Account created");
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthLayout title="Create your account" subtitle="Join growers, retailers and shoppers">
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Full name" value=name />
                <TextField label="Email" value=email input_type="email" placeholder="you@farm.com" />
                <div class="grid grid-cols-2 gap-3">
                    <TextField label="Phone" value=phone input_type="tel" />
                    <TextField label="Location" value=location placeholder="Village, district" />
                </div>
                <RoleSelect value=role />
                <TextField label="Password" value=password input_type="password" />
                <TextField label="Confirm password" value=confirm_password input_type="password" />

                {move || error.get().map(|msg| view! {
                    <p class="text-sm text-red-600 dark:text-red-400">{msg}</p>
                })}

                <button
                    type="submit"
                    class="w-full py-3 rounded-xl bg-emerald-600 hover:bg-emerald-700 text-white font-medium transition-colors"
                >
                    "Register"
                </button>
            </form>

            <p class="text-center text-sm text-emerald-700/80 dark:text-emerald-300/80 mt-6">
                "Already registered? "
                <A href="/login" class="text-emerald-600 dark:text-emerald-400 font-medium hover:underline">
                    "Sign in"
                </A>
            </p>
        </AuthLayout>
    }
}
