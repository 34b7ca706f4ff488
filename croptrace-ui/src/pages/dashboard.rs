//! Farm Dashboard
//!
//! Shown to farmers and to any role without a dedicated dashboard.

use croptrace::catalog::farm::{crops, tasks};
use croptrace::catalog::{
    display_date, filter_by_name, Crop, CropStatus, FarmStats, FarmTab, FarmTask, Priority,
};
use leptos::*;

use crate::components::{
    welcome_title, MainColumn, NoResults, PageShell, SearchBar, Sidebar, StatTile, TabNav,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let tab = create_rw_signal(FarmTab::Overview);
    let query = create_rw_signal(String::new());

    view! {
        <PageShell>
            <Sidebar
                tip_title="Field tip"
                tip="Log every harvest with a batch code so buyers can trace it."
            >
                <TabNav active=tab />
            </Sidebar>

            <MainColumn title=welcome_title("Farmer") subtitle="Here's how your fields are doing">
                {move || match tab.get() {
                    FarmTab::Overview => view! { <OverviewTab /> }.into_view(),
                    FarmTab::Crops => view! { <CropsTab query=query /> }.into_view(),
                    FarmTab::Tasks => view! { <TasksTab /> }.into_view(),
                }}
            </MainColumn>
        </PageShell>
    }
}

#[component]
fn OverviewTab() -> impl IntoView {
    let stats = FarmStats::of(crops(), tasks());

    view! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 mb-6">
            <StatTile label="Crops" value=stats.crops.to_string() icon="🌱" />
            <StatTile label="Acres planted" value=format!("{:.1}", stats.acres) icon="🗺️" />
            <StatTile label="Ready to harvest" value=stats.ready.to_string() icon="🧺" />
            <StatTile
                label="Open tasks"
                value=stats.open_tasks.to_string()
                icon="📋"
                warn=stats.open_tasks > 0
            />
        </div>

        <div class="bg-white/80 dark:bg-gray-800/80 rounded-2xl border border-emerald-100 dark:border-gray-700 p-5 animate-fade-in">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-semibold text-emerald-900 dark:text-emerald-100">"Field health"</h3>
                <span class="text-sm text-emerald-700/80 dark:text-emerald-300/80">
                    {format!("Average {}%", stats.average_health)}
                </span>
            </div>
            <div class="space-y-3">
                {crops().iter().map(|crop| view! {
                    <div>
                        <div class="flex justify-between text-sm text-emerald-800 dark:text-emerald-200 mb-1">
                            <span>{format!("{} · {}", crop.name, crop.field)}</span>
                            <span>{format!("{}%", crop.health)}</span>
                        </div>
                        <div class="h-2 rounded-full bg-emerald-100 dark:bg-gray-700 overflow-hidden">
                            <div
                                class=health_bar_class(crop.health)
                                style=format!("width: {}%", crop.health.min(100))
                            ></div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

fn health_bar_class(health: u8) -> &'static str {
    match health {
        80.. => "h-full rounded-full bg-emerald-500",
        60..=79 => "h-full rounded-full bg-lime-500",
        _ => "h-full rounded-full bg-amber-500",
    }
}

#[component]
fn CropsTab(query: RwSignal<String>) -> impl IntoView {
    let filtered = create_memo(move |_| query.with(|q| filter_by_name(crops(), q)));

    view! {
        <SearchBar query=query placeholder="Search crops..." />

        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {move || {
                let found = filtered.get();
                if found.is_empty() {
                    view! { <NoResults query=query /> }.into_view()
                } else {
                    found.into_iter().map(crop_card).collect_view()
                }
            }}
        </div>
    }
}

fn crop_card(crop: &'static Crop) -> impl IntoView {
    let badge = match crop.status {
        CropStatus::Growing => "bg-lime-100 text-lime-800 dark:bg-lime-900/40 dark:text-lime-200",
        CropStatus::ReadyToHarvest => "bg-amber-100 text-amber-800 dark:bg-amber-900/40 dark:text-amber-200",
        CropStatus::Harvested => "bg-emerald-100 text-emerald-800 dark:bg-emerald-900/40 dark:text-emerald-200",
    };

    view! {
        <div class="bg-white/80 dark:bg-gray-800/80 rounded-2xl border border-emerald-100 dark:border-gray-700 p-5 animate-fade-in">
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="text-lg font-semibold text-emerald-900 dark:text-emerald-100">{crop.name}</h3>
                    <p class="text-sm text-emerald-700/80 dark:text-emerald-300/80">
                        {format!("{} · {} · {:.1} acres", crop.variety, crop.field, crop.area_acres)}
                    </p>
                </div>
                <span class=format!("px-2 py-0.5 rounded-full text-xs {}", badge)>{crop.status.label()}</span>
            </div>
            <div class="grid grid-cols-2 gap-2 mt-4 text-xs">
                <div class="p-2 rounded-lg bg-emerald-50 dark:bg-gray-700">
                    <p class="text-emerald-700/70 dark:text-emerald-300/70">"Planted"</p>
                    <p class="font-medium text-emerald-900 dark:text-emerald-100">{display_date(crop.planted)}</p>
                </div>
                <div class="p-2 rounded-lg bg-amber-50 dark:bg-gray-700">
                    <p class="text-amber-700/70 dark:text-amber-300/70">"Harvest"</p>
                    <p class="font-medium text-amber-900 dark:text-amber-100">{display_date(crop.expected_harvest)}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TasksTab() -> impl IntoView {
    let mut sorted: Vec<&'static FarmTask> = tasks().iter().collect();
    sorted.sort_by_key(|t| (t.done, t.priority));

    view! {
        <div class="space-y-3">
            {sorted.into_iter().map(|task| {
                let row_class = if task.done {
                    "flex items-center justify-between bg-white/50 dark:bg-gray-800/50 rounded-2xl border border-emerald-100 dark:border-gray-700 p-4 opacity-60"
                } else {
                    "flex items-center justify-between bg-white/80 dark:bg-gray-800/80 rounded-2xl border border-emerald-100 dark:border-gray-700 p-4"
                };
                view! {
                    <div class=row_class>
                        <div>
                            <p class="font-medium text-emerald-900 dark:text-emerald-100">
                                {if task.done { "✅ " } else { "⬜ " }}{task.title}
                            </p>
                            <p class="text-sm text-emerald-700/80 dark:text-emerald-300/80">
                                {format!("{} · due {}", task.field, display_date(task.due))}
                            </p>
                        </div>
                        <span class=priority_class(task.priority)>{task.priority.label()}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "px-2 py-0.5 rounded-full text-xs bg-red-100 text-red-800 dark:bg-red-900/40 dark:text-red-200",
        Priority::Medium => "px-2 py-0.5 rounded-full text-xs bg-amber-100 text-amber-800 dark:bg-amber-900/40 dark:text-amber-200",
        Priority::Low => "px-2 py-0.5 rounded-full text-xs bg-sky-100 text-sky-800 dark:bg-sky-900/40 dark:text-sky-200",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_bar_thresholds() {
        assert!(health_bar_class(95).contains("emerald"));
        assert!(health_bar_class(80).contains("emerald"));
        assert!(health_bar_class(79).contains("lime"));
        assert!(health_bar_class(59).contains("amber"));
    }
}
