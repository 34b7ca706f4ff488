//! Sign-in page
//!
//! Any non-empty name, email and password signs in; the password is
//! checked for presence only and never stored.

use croptrace::{LoginForm, Role};
use leptos::*;
use leptos_router::A;

use crate::components::{AuthLayout, RoleSelect, TextField};
use crate::state::use_app_context;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let role = create_rw_signal(Role::Farmer);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };

        match form.into_user() {
            Ok(user) => {
                tracing::info!("Signed in as {}", user.name);
                ctx.login(user);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthLayout title="Welcome back" subtitle="Sign in to track your produce">
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Name" value=name placeholder="Your name" />
                <TextField label="Email" value=email input_type="email" placeholder="you@farm.com" />
                <TextField label="Password" value=password input_type="password" />
                <RoleSelect value=role />

                {move || error.get().map(|msg| view! {
                    <p class="text-sm text-red-600 dark:text-red-400">{msg}</p>
                })}

                <button
                    type="submit"
                    class="w-full py-3 rounded-xl bg-emerald-600 hover:bg-emerald-700 text-white font-medium transition-colors"
                >
                    "Sign in"
                </button>
            </form>

            <p class="text-center text-sm text-emerald-700/80 dark:text-emerald-300/80 mt-6">
                "New here? "
                <A href="/register" class="text-emerald-600 dark:text-emerald-400 font-medium hover:underline">
                    "Create an account"
                </A>
            </p>
        </AuthLayout>
    }
}
