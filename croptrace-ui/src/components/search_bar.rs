//! Search input and empty-result placeholder

use leptos::*;

#[component]
pub fn SearchBar(
    query: RwSignal<String>,
    #[prop(default = "Search...")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-6 animate-fade-in">
            <div class="relative max-w-md">
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    class="w-full pl-10 pr-4 py-3 bg-white/90 dark:bg-gray-800/90 border border-emerald-200 dark:border-gray-700 rounded-xl text-emerald-900 dark:text-emerald-100 focus:ring-2 focus:ring-emerald-400 focus:border-transparent"
                />
                <span class="absolute left-3 top-3 text-emerald-500">"🔍"</span>
            </div>
        </div>
    }
}

/// Shown when a search matches nothing
#[component]
pub fn NoResults(query: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="col-span-full text-center py-12 text-emerald-700/70 dark:text-emerald-300/70">
            {move || format!("Nothing matches \"{}\"", query.get())}
        </div>
    }
}
