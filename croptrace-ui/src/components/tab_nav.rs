//! Sidebar tab list

use croptrace::catalog::Tab;
use leptos::*;

#[component]
pub fn TabNav<T: Tab>(active: RwSignal<T>) -> impl IntoView {
    view! {
        <nav class="space-y-2">
            {T::all().iter().copied().map(|tab| {
                view! {
                    <button
                        on:click=move |_| active.set(tab)
                        class=move || tab_class(active.get() == tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

fn tab_class(selected: bool) -> &'static str {
    if selected {
        "w-full text-left px-4 py-3 rounded-xl transition-all duration-200 \
         bg-emerald-100 text-emerald-700 dark:bg-gray-700 dark:text-emerald-100"
    } else {
        "w-full text-left px-4 py-3 rounded-xl transition-all duration-200 \
         hover:bg-emerald-50 dark:hover:bg-gray-700 text-gray-700 dark:text-emerald-100/80"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_tab_is_highlighted() {
        assert!(tab_class(true).contains("bg-emerald-100"));
        assert!(!tab_class(false).contains("bg-emerald-100"));
    }
}
