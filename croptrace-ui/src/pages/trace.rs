//! Trace page
//!
//! Browse batches by product and follow one from harvest to shelf.
//! `/trace?batch=CODE` opens with that batch selected.

use croptrace::catalog::trace::batches;
use croptrace::catalog::{filter_by_name, find_batch, Batch};
use leptos::*;
use leptos_router::use_query_map;

use crate::components::{
    BatchHeader, BatchTimeline, MainColumn, NoResults, PageShell, SearchBar, Sidebar,
};

#[component]
pub fn Trace() -> impl IntoView {
    let query = create_rw_signal(String::new());

    let requested = use_query_map().with_untracked(|params| params.get("batch").cloned());
    let initial = requested
        .as_deref()
        .and_then(find_batch)
        .or_else(|| batches().first());
    let selected = create_rw_signal(initial);

    let filtered = create_memo(move |_| query.with(|q| filter_by_name(batches(), q)));
    let shown = create_memo(move |_| filtered.with(|found| shown_batch(selected.get(), found)));

    view! {
        <PageShell>
            <Sidebar
                tip_title="Every batch has a story"
                tip="Each stage is signed off by the handler who touched it."
            >
                <p class="text-sm font-semibold text-emerald-800 dark:text-emerald-200 mb-2">"Batches"</p>
                <nav class="space-y-2">
                    {move || filtered.get().into_iter().map(|batch| batch_button(batch, selected, shown)).collect_view()}
                </nav>
            </Sidebar>

            <MainColumn
                title="Farm to shelf".to_string()
                subtitle="Follow a batch through every stage of the supply chain"
            >
                <SearchBar query=query placeholder="Search by product..." />

                {move || {
                    if filtered.with(Vec::is_empty) {
                        return view! { <NoResults query=query /> }.into_view();
                    }
                    match shown.get() {
                        Some(batch) => view! {
                            <div class="bg-white/80 dark:bg-gray-800/80 rounded-2xl border border-emerald-100 dark:border-gray-700 p-6 animate-fade-in">
                                <BatchHeader batch=batch />
                                <BatchTimeline batch=batch />
                            </div>
                        }.into_view(),
                        None => view! {
                            <p class="text-emerald-700/80 dark:text-emerald-300/80">"Select a batch to see its journey."</p>
                        }.into_view(),
                    }
                }}
            </MainColumn>
        </PageShell>
    }
}

/// The selected batch while the search still lists it, otherwise the first match
fn shown_batch(selected: Option<&'static Batch>, found: &[&'static Batch]) -> Option<&'static Batch> {
    selected
        .filter(|s| found.iter().any(|b| b.code == s.code))
        .or_else(|| found.first().copied())
}

fn batch_button(
    batch: &'static Batch,
    selected: RwSignal<Option<&'static Batch>>,
    shown: Memo<Option<&'static Batch>>,
) -> impl IntoView {
    let is_selected = move || shown.with(|s| s.is_some_and(|b| b.code == batch.code));

    view! {
        <button
            on:click=move |_| selected.set(Some(batch))
            class=move || if is_selected() {
                "w-full text-left px-4 py-2 rounded-xl bg-emerald-100 text-emerald-700 dark:bg-gray-700 dark:text-emerald-100"
            } else {
                "w-full text-left px-4 py-2 rounded-xl hover:bg-emerald-50 dark:hover:bg-gray-700 text-gray-700 dark:text-emerald-100/80"
            }
        >
            <span class="block text-sm font-medium">{batch.product}</span>
            <span class="block font-mono text-xs opacity-70">{batch.code}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_batch_follows_search() {
        let tomato = find_batch("CT-TOM-2501");
        let rice = find_batch("CT-RCE-2412");

        let all = filter_by_name(batches(), "");
        assert_eq!(shown_batch(rice, &all).map(|b| b.code), Some("CT-RCE-2412"));

        // Searching away from the selection falls back to the first match
        let tomatoes = filter_by_name(batches(), "tomato");
        assert_eq!(shown_batch(rice, &tomatoes), tomato);

        assert_eq!(shown_batch(rice, &filter_by_name(batches(), "mango")), None);
        assert_eq!(shown_batch(None, &all), batches().first());
    }
}
