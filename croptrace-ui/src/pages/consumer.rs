//! Consumer Dashboard
//!
//! Product catalog with search, seasonal tips, nutrition facts and recipes.

use croptrace::catalog::products::{products, recipes, seasonal_tips};
use croptrace::catalog::{display_date, filter_by_name, ConsumerTab, Product};
use leptos::*;

use crate::components::{
    welcome_title, MainColumn, NoResults, PageShell, SearchBar, Sidebar, TabNav,
};

#[component]
pub fn ConsumerDashboard() -> impl IntoView {
    let tab = create_rw_signal(ConsumerTab::Products);
    let query = create_rw_signal(String::new());

    view! {
        <PageShell>
            <Sidebar
                tip_title="Shop smart"
                tip="Buy what's in season: it travels less and tastes better."
            >
                <TabNav active=tab />
            </Sidebar>

            <MainColumn
                title=welcome_title("Consumer")
                subtitle="Fresh produce, traced from the farm to your table"
            >
                {move || match tab.get() {
                    ConsumerTab::Products => view! { <ProductsTab query=query /> }.into_view(),
                    ConsumerTab::Seasonal => view! { <SeasonalTab /> }.into_view(),
                    ConsumerTab::Nutrition => view! { <NutritionTab /> }.into_view(),
                    ConsumerTab::Recipes => view! { <RecipesTab /> }.into_view(),
                }}
            </MainColumn>
        </PageShell>
    }
}

#[component]
fn ProductsTab(query: RwSignal<String>) -> impl IntoView {
    let filtered = create_memo(move |_| query.with(|q| filter_by_name(products(), q)));

    view! {
        <SearchBar query=query placeholder="Search products..." />

        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
            {move || {
                let found = filtered.get();
                if found.is_empty() {
                    view! { <NoResults query=query /> }.into_view()
                } else {
                    found.into_iter().map(product_card).collect_view()
                }
            }}
        </div>
    }
}

fn product_card(product: &'static Product) -> impl IntoView {
    let shelf_life = product
        .shelf_life_days()
        .map(|days| format!("{} days shelf life", days));

    view! {
        <div class="bg-white/80 dark:bg-gray-800/80 backdrop-blur rounded-2xl border border-emerald-100 dark:border-gray-700 overflow-hidden shadow-sm hover:shadow-lg hover:-translate-y-1 transition-all duration-300 animate-fade-in">
            <img src=product.image alt=product.name class="w-full h-40 object-cover" />
            <div class="p-5">
                <div class="flex items-start justify-between">
                    <h3 class="text-lg font-semibold text-emerald-900 dark:text-emerald-100">{product.name}</h3>
                    <span class="text-emerald-600 dark:text-emerald-400 font-bold">{product.price}</span>
                </div>
                <p class="text-sm text-emerald-700/80 dark:text-emerald-300/80 mt-1">
                    {format!("📍 {}", product.origin)}
                </p>

                <div class="grid grid-cols-2 gap-2 mt-4 text-xs">
                    <div class="p-2 rounded-lg bg-emerald-50 dark:bg-gray-700">
                        <p class="text-emerald-700/70 dark:text-emerald-300/70">"Harvested"</p>
                        <p class="font-medium text-emerald-900 dark:text-emerald-100">{display_date(product.harvest_date)}</p>
                    </div>
                    <div class="p-2 rounded-lg bg-amber-50 dark:bg-gray-700">
                        <p class="text-amber-700/70 dark:text-amber-300/70">"Best before"</p>
                        <p class="font-medium text-amber-900 dark:text-amber-100">{display_date(product.expiry_date)}</p>
                    </div>
                </div>

                {shelf_life.map(|s| view! {
                    <p class="text-xs text-emerald-600 dark:text-emerald-400 mt-2">{s}</p>
                })}

                <div class="flex flex-wrap gap-1 mt-3">
                    {product.cooking_methods.iter().map(|m| view! {
                        <span class="px-2 py-0.5 rounded-full text-xs bg-lime-100 text-lime-800 dark:bg-gray-700 dark:text-lime-200">{*m}</span>
                    }).collect_view()}
                </div>

                <p class="text-xs text-emerald-700/80 dark:text-emerald-300/70 mt-3">
                    {format!("🧊 {}", product.storage_tips)}
                </p>
                <p class="text-xs text-emerald-700/80 dark:text-emerald-300/70 mt-1">
                    {format!("🗓️ {}", product.seasonal_availability)}
                </p>
            </div>
        </div>
    }
}

#[component]
fn SeasonalTab() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {seasonal_tips().iter().map(|tip| view! {
                <div class="bg-white/80 dark:bg-gray-800/80 rounded-2xl border border-emerald-100 dark:border-gray-700 p-5 animate-fade-in">
                    <h3 class="text-lg font-semibold text-emerald-900 dark:text-emerald-100">{tip.season}</h3>
                    <p class="text-sm text-emerald-700/80 dark:text-emerald-300/80 mt-2">{tip.tip}</p>
                    <div class="flex flex-wrap gap-1 mt-3">
                        {tip.products.iter().map(|p| view! {
                            <span class="px-2 py-0.5 rounded-full text-xs bg-emerald-100 text-emerald-800 dark:bg-gray-700 dark:text-emerald-200">{*p}</span>
                        }).collect_view()}
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn NutritionTab() -> impl IntoView {
    view! {
        <div class="space-y-4">
            {products().iter().map(|product| view! {
                <div class="bg-white/80 dark:bg-gray-800/80 rounded-2xl border border-emerald-100 dark:border-gray-700 p-5 animate-fade-in">
                    <div class="flex items-center justify-between mb-3">
                        <h3 class="text-lg font-semibold text-emerald-900 dark:text-emerald-100">{product.name}</h3>
                        <span class="text-xs text-emerald-700/70 dark:text-emerald-300/70">"per 100g"</span>
                    </div>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                        {product.nutrition.entries().into_iter().map(|(label, value)| view! {
                            <div class="p-3 rounded-xl bg-emerald-50 dark:bg-gray-700 text-center">
                                <p class="text-xs text-emerald-700/70 dark:text-emerald-300/70">{label}</p>
                                <p class="text-lg font-bold text-emerald-900 dark:text-emerald-100">{value}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn RecipesTab() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {recipes().iter().map(|recipe| view! {
                <div class="bg-white/80 dark:bg-gray-800/80 rounded-2xl border border-emerald-100 dark:border-gray-700 p-5 animate-fade-in">
                    <h3 class="text-lg font-semibold text-emerald-900 dark:text-emerald-100">{recipe.title}</h3>
                    <p class="text-sm text-emerald-700/80 dark:text-emerald-300/80 mt-2">{recipe.description}</p>
                    <p class="text-xs text-emerald-600 dark:text-emerald-400 mt-3">{format!("⏱️ {}", recipe.time)}</p>
                </div>
            }).collect_view()}
        </div>
    }
}
