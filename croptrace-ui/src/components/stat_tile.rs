//! Stat Tile Component
//!
//! Headline number with a label, used on the overview tabs.

use leptos::*;

#[component]
pub fn StatTile(
    label: &'static str,
    #[prop(into)]
    value: String,
    #[prop(default = "📊")]
    icon: &'static str,
    /// Highlight in amber, e.g. for low stock
    #[prop(optional)]
    warn: bool,
) -> impl IntoView {
    let value_class = if warn {
        "text-2xl font-bold text-amber-600 dark:text-amber-400"
    } else {
        "text-2xl font-bold text-emerald-600 dark:text-emerald-400"
    };

    view! {
        <div class="bg-white/80 dark:bg-gray-800/80 backdrop-blur rounded-2xl border border-emerald-100 dark:border-gray-700 p-4 shadow-sm">
            <div class="flex items-center justify-between">
                <span class="text-sm text-emerald-700/70 dark:text-emerald-300/70">{label}</span>
                <span class="text-xl">{icon}</span>
            </div>
            <p class=value_class>{value}</p>
        </div>
    }
}
