//! Form inputs shared by the sign-in, registration and profile forms

use croptrace::Role;
use leptos::*;

/// Labelled text input bound to a signal
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-emerald-700/80 dark:text-emerald-300/80 mb-1">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full px-4 py-2 bg-white/90 dark:bg-gray-700 border border-emerald-200 dark:border-gray-600 rounded-xl text-emerald-900 dark:text-emerald-100 focus:ring-2 focus:ring-emerald-400 focus:border-transparent"
            />
        </label>
    }
}

/// Role picker offering the selectable roles
#[component]
pub fn RoleSelect(value: RwSignal<Role>) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-emerald-700/80 dark:text-emerald-300/80 mb-1">"I am a"</span>
            <select
                on:change=move |ev| value.set(Role::from(event_target_value(&ev)))
                class="w-full px-4 py-2 bg-white/90 dark:bg-gray-700 border border-emerald-200 dark:border-gray-600 rounded-xl text-emerald-900 dark:text-emerald-100 focus:ring-2 focus:ring-emerald-400"
            >
                {Role::SELECTABLE.into_iter().map(|role| {
                    let label = role.to_string();
                    let selected = move || value.with(|v| *v == role);
                    view! {
                        <option value=label.clone() prop:selected=selected>{label.clone()}</option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
