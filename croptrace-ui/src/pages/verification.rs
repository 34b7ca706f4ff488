//! Verification page
//!
//! Check a batch code printed on packaging against the trace records.

use croptrace::catalog::trace::batches;
use croptrace::catalog::{find_batch, Batch};
use leptos::*;

use crate::components::{BatchHeader, BatchTimeline, MainColumn, PageShell, Sidebar};

/// Outcome of checking a code
#[derive(Debug, Clone, Copy, PartialEq)]
enum Verdict {
    Authentic(&'static Batch),
    Unverified(&'static Batch),
    NotFound,
}

fn verify(code: &str) -> Verdict {
    match find_batch(code) {
        Some(batch) if batch.is_authentic() => Verdict::Authentic(batch),
        Some(batch) => Verdict::Unverified(batch),
        None => Verdict::NotFound,
    }
}

#[component]
pub fn Verification() -> impl IntoView {
    let code = create_rw_signal(String::new());
    let (checked, set_checked) = create_signal(None::<(String, Verdict)>);

    let run_check = move || {
        let entered = code.get_untracked();
        let verdict = verify(&entered);
        tracing::debug!("Verified {:?}: {:?}", entered, verdict.batch().map(|b| b.code));
        set_checked.set(Some((entered, verdict)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        run_check();
    };

    view! {
        <PageShell>
            <Sidebar
                tip_title="Where's the code?"
                tip="Batch codes are printed next to the best-before date."
            >
                <p class="text-sm font-semibold text-emerald-800 dark:text-emerald-200 mb-2">"Try a sample"</p>
                <div class="space-y-2">
                    {batches().iter().map(|batch| view! {
                        <button
                            on:click=move |_| {
                                code.set(batch.code.to_string());
                                run_check();
                            }
                            class="w-full text-left px-4 py-2 rounded-xl font-mono text-sm hover:bg-emerald-50 dark:hover:bg-gray-700 text-gray-700 dark:text-emerald-100/80"
                        >
                            {batch.code}
                        </button>
                    }).collect_view()}
                </div>
            </Sidebar>

            <MainColumn
                title="Verify your produce".to_string()
                subtitle="Enter the batch code from the label"
            >
                <form on:submit=on_submit class="flex gap-3 max-w-xl mb-6 animate-fade-in">
                    <input
                        type="text"
                        placeholder="e.g. CT-TOM-2501"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                        class="flex-1 px-4 py-3 bg-white/90 dark:bg-gray-800/90 border border-emerald-200 dark:border-gray-700 rounded-xl font-mono text-emerald-900 dark:text-emerald-100 focus:ring-2 focus:ring-emerald-400 focus:border-transparent"
                    />
                    <button
                        type="submit"
                        class="px-6 py-3 rounded-xl bg-emerald-600 hover:bg-emerald-700 text-white font-medium transition-colors"
                    >
                        "Verify"
                    </button>
                </form>

                {move || checked.get().map(|(entered, verdict)| verdict_view(entered, verdict))}
            </MainColumn>
        </PageShell>
    }
}

impl Verdict {
    fn batch(self) -> Option<&'static Batch> {
        match self {
            Verdict::Authentic(batch) | Verdict::Unverified(batch) => Some(batch),
            Verdict::NotFound => None,
        }
    }
}

fn verdict_view(entered: String, verdict: Verdict) -> View {
    let (banner_class, icon, headline) = match verdict {
        Verdict::Authentic(_) => (
            "bg-emerald-50 border-emerald-200 text-emerald-800 dark:bg-emerald-900/30 dark:border-emerald-800 dark:text-emerald-200",
            "✅",
            "Authentic: certified and verified at every stage".to_string(),
        ),
        Verdict::Unverified(_) => (
            "bg-amber-50 border-amber-200 text-amber-800 dark:bg-amber-900/30 dark:border-amber-800 dark:text-amber-200",
            "⚠️",
            "Found, but not every stage is certified and verified".to_string(),
        ),
        Verdict::NotFound => (
            "bg-red-50 border-red-200 text-red-800 dark:bg-red-900/30 dark:border-red-800 dark:text-red-200",
            "❌",
            format!("No batch matches \"{}\"", entered.trim()),
        ),
    };

    view! {
        <div class="space-y-6 animate-fade-in">
            <div class=format!("flex items-center gap-3 p-4 rounded-2xl border {}", banner_class)>
                <span class="text-2xl">{icon}</span>
                <p class="font-medium">{headline}</p>
            </div>
            {verdict.batch().map(|batch| view! {
                <div class="bg-white/80 dark:bg-gray-800/80 rounded-2xl border border-emerald-100 dark:border-gray-700 p-6">
                    <BatchHeader batch=batch />
                    <BatchTimeline batch=batch />
                </div>
            })}
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdicts() {
        assert!(matches!(verify("CT-TOM-2501"), Verdict::Authentic(_)));
        assert!(matches!(verify(" ct-tom-2501 "), Verdict::Authentic(_)));
        assert!(matches!(verify("CT-APL-2501"), Verdict::Unverified(_)));
        assert!(matches!(verify("CT-SPN-2501"), Verdict::Unverified(_)));
        assert_eq!(verify("CT-XXX-0000"), Verdict::NotFound);
        assert_eq!(verify(""), Verdict::NotFound);
    }
}
