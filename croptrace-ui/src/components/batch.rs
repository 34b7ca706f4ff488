//! Batch provenance display shared by the trace and verification pages

use croptrace::catalog::{display_date, Batch, Stage};
use leptos::*;

/// Farm, grade and certification header for a batch
#[component]
pub fn BatchHeader(batch: &'static Batch) -> impl IntoView {
    view! {
        <div class="flex items-start justify-between flex-wrap gap-3">
            <div>
                <p class="font-mono text-xs text-emerald-600 dark:text-emerald-400">{batch.code}</p>
                <h3 class="text-xl font-semibold text-emerald-900 dark:text-emerald-100">{batch.product}</h3>
                <p class="text-sm text-emerald-700/80 dark:text-emerald-300/80">
                    {format!("{} · {} · {}", batch.farm, batch.farmer, batch.region)}
                </p>
                <p class="text-xs text-emerald-700/70 dark:text-emerald-300/70 mt-1">
                    {format!("Grade {}", batch.grade)}
                </p>
            </div>
            {match &batch.certification {
                Some(cert) => view! {
                    <div class="text-right text-xs p-3 rounded-xl bg-emerald-50 dark:bg-gray-700">
                        <p class="font-semibold text-emerald-800 dark:text-emerald-200">{format!("✓ {}", cert.body)}</p>
                        <p class="font-mono text-emerald-700/80 dark:text-emerald-300/80">{cert.certificate_id}</p>
                        <p class="text-emerald-700/70 dark:text-emerald-300/70">
                            {format!("Valid until {}", display_date(cert.valid_until))}
                        </p>
                    </div>
                }.into_view(),
                None => view! {
                    <span class="px-2 py-1 rounded-full text-xs bg-gray-100 text-gray-700 dark:bg-gray-700 dark:text-gray-300">
                        "Not certified"
                    </span>
                }.into_view(),
            }}
        </div>
    }
}

/// Vertical timeline of a batch's stages, oldest first
#[component]
pub fn BatchTimeline(batch: &'static Batch) -> impl IntoView {
    view! {
        <ol class="relative border-l-2 border-emerald-200 dark:border-gray-600 ml-3 mt-6 space-y-6">
            {batch.stages.iter().map(stage_item).collect_view()}
        </ol>
    }
}

fn stage_item(stage: &'static Stage) -> impl IntoView {
    let (mark, mark_class) = if stage.verified {
        ("Verified", "text-emerald-600 dark:text-emerald-400")
    } else {
        ("Unverified", "text-amber-600 dark:text-amber-400")
    };

    view! {
        <li class="ml-6 animate-slide-in">
            <span class="absolute -left-4 flex items-center justify-center w-8 h-8 rounded-full bg-white dark:bg-gray-800 border-2 border-emerald-200 dark:border-gray-600">
                {stage.kind.icon()}
            </span>
            <div class="flex items-center justify-between">
                <h4 class="font-semibold text-emerald-900 dark:text-emerald-100">{stage.kind.label()}</h4>
                <span class=format!("text-xs font-medium {}", mark_class)>{mark}</span>
            </div>
            <p class="text-xs text-emerald-700/70 dark:text-emerald-300/70">
                {format!("{} · {} · {}", display_date(stage.date), stage.location, stage.handler)}
            </p>
            <p class="text-sm text-emerald-800 dark:text-emerald-200 mt-1">{stage.note}</p>
        </li>
    }
}
