//! Retailer Dashboard
//!
//! Stock levels against the configured low-stock threshold, incoming
//! orders, and the supplier directory.

use croptrace::catalog::inventory::{inventory, orders, suppliers};
use croptrace::catalog::{
    display_date, filter_by_name, InventoryItem, InventorySummary, OrderStatus, RetailerTab,
};
use leptos::*;
use leptos_router::A;

use crate::components::{
    welcome_title, MainColumn, NoResults, PageShell, SearchBar, Sidebar, StatTile, TabNav,
};
use crate::state::use_app_context;

#[component]
pub fn RetailerDashboard() -> impl IntoView {
    let tab = create_rw_signal(RetailerTab::Inventory);
    let stock_query = create_rw_signal(String::new());
    let supplier_query = create_rw_signal(String::new());

    view! {
        <PageShell>
            <Sidebar
                tip_title="Restock early"
                tip="Reorder fast movers before they hit the low-stock line."
            >
                <TabNav active=tab />
            </Sidebar>

            <MainColumn
                title=welcome_title("Retailer")
                subtitle="Keep shelves stocked with verified produce"
            >
                {move || match tab.get() {
                    RetailerTab::Inventory => view! { <InventoryTab query=stock_query /> }.into_view(),
                    RetailerTab::Orders => view! { <OrdersTab /> }.into_view(),
                    RetailerTab::Suppliers => view! { <SuppliersTab query=supplier_query /> }.into_view(),
                }}
            </MainColumn>
        </PageShell>
    }
}

#[component]
fn InventoryTab(query: RwSignal<String>) -> impl IntoView {
    let threshold = use_app_context().config.ui.low_stock_threshold;
    let summary = InventorySummary::of(inventory(), threshold);
    let filtered = create_memo(move |_| query.with(|q| filter_by_name(inventory(), q)));

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
            <StatTile label="Products" value=summary.products.to_string() icon="📦" />
            <StatTile label="Units in stock" value=summary.units.to_string() icon="🧮" />
            <StatTile
                label="Low stock"
                value=summary.low_stock.to_string()
                icon="⚠️"
                warn=summary.low_stock > 0
            />
        </div>

        <SearchBar query=query placeholder="Search inventory..." />

        <div class="bg-white/80 dark:bg-gray-800/80 rounded-2xl border border-emerald-100 dark:border-gray-700 overflow-x-auto animate-fade-in">
            <table class="w-full text-sm">
                <thead class="bg-emerald-50 dark:bg-gray-700 text-emerald-800 dark:text-emerald-200">
                    <tr>
                        <th class="text-left px-4 py-3">"Product"</th>
                        <th class="text-left px-4 py-3">"Category"</th>
                        <th class="text-right px-4 py-3">"Stock"</th>
                        <th class="text-left px-4 py-3">"Price"</th>
                        <th class="text-left px-4 py-3">"Supplier"</th>
                        <th class="text-left px-4 py-3">"Batch"</th>
                        <th class="text-left px-4 py-3">"Expires"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let found = filtered.get();
                        if found.is_empty() {
                            view! { <tr><td colspan="7"><NoResults query=query /></td></tr> }.into_view()
                        } else {
                            found.into_iter().map(|item| inventory_row(item, threshold)).collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn inventory_row(item: &'static InventoryItem, threshold: u32) -> impl IntoView {
    let stock_class = if item.is_low_stock(threshold) {
        "text-right px-4 py-3 font-semibold text-amber-600 dark:text-amber-400"
    } else {
        "text-right px-4 py-3 text-emerald-900 dark:text-emerald-100"
    };

    view! {
        <tr class="border-t border-emerald-100 dark:border-gray-700 text-emerald-900 dark:text-emerald-100">
            <td class="px-4 py-3 font-medium">{item.name}</td>
            <td class="px-4 py-3">{item.category}</td>
            <td class=stock_class>{format!("{} {}", item.stock, item.unit)}</td>
            <td class="px-4 py-3">{item.price}</td>
            <td class="px-4 py-3">{item.supplier}</td>
            <td class="px-4 py-3">
                <A
                    href=format!("/trace?batch={}", item.batch_code)
                    class="font-mono text-xs text-emerald-600 dark:text-emerald-400 hover:underline"
                >
                    {item.batch_code}
                </A>
            </td>
            <td class="px-4 py-3">{display_date(item.expiry_date)}</td>
        </tr>
    }
}

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "bg-amber-100 text-amber-800 dark:bg-amber-900/40 dark:text-amber-200",
        OrderStatus::Processing => "bg-sky-100 text-sky-800 dark:bg-sky-900/40 dark:text-sky-200",
        OrderStatus::Shipped => "bg-indigo-100 text-indigo-800 dark:bg-indigo-900/40 dark:text-indigo-200",
        OrderStatus::Delivered => "bg-emerald-100 text-emerald-800 dark:bg-emerald-900/40 dark:text-emerald-200",
    }
}

#[component]
fn OrdersTab() -> impl IntoView {
    view! {
        <div class="space-y-3">
            {orders().iter().map(|order| view! {
                <div class="flex items-center justify-between bg-white/80 dark:bg-gray-800/80 rounded-2xl border border-emerald-100 dark:border-gray-700 p-4 animate-fade-in">
                    <div>
                        <p class="font-semibold text-emerald-900 dark:text-emerald-100">{order.id}</p>
                        <p class="text-sm text-emerald-700/80 dark:text-emerald-300/80">
                            {format!("{} · {} items · {}", order.customer, order.items, display_date(order.date))}
                        </p>
                    </div>
                    <div class="text-right">
                        <p class="font-bold text-emerald-700 dark:text-emerald-300">{order.total}</p>
                        <span class=format!("inline-block mt-1 px-2 py-0.5 rounded-full text-xs {}", status_class(order.status))>
                            {order.status.label()}
                        </span>
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn SuppliersTab(query: RwSignal<String>) -> impl IntoView {
    let filtered = create_memo(move |_| query.with(|q| filter_by_name(suppliers(), q)));

    view! {
        <SearchBar query=query placeholder="Search suppliers..." />

        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {move || {
                let found = filtered.get();
                if found.is_empty() {
                    return view! { <NoResults query=query /> }.into_view();
                }
                found.into_iter().map(|supplier| view! {
                    <div class="bg-white/80 dark:bg-gray-800/80 rounded-2xl border border-emerald-100 dark:border-gray-700 p-5 animate-fade-in">
                        <div class="flex items-start justify-between">
                            <div>
                                <h3 class="text-lg font-semibold text-emerald-900 dark:text-emerald-100">{supplier.name}</h3>
                                <p class="text-sm text-emerald-700/80 dark:text-emerald-300/80">{format!("📍 {}", supplier.location)}</p>
                            </div>
                            <span class="text-sm font-medium text-amber-600">{format!("★ {:.1}", supplier.rating)}</span>
                        </div>
                        <p class="text-sm text-emerald-800 dark:text-emerald-200 mt-3">{supplier.products.join(", ")}</p>
                        {supplier.certified.then(|| view! {
                            <span class="inline-block mt-3 px-2 py-0.5 rounded-full text-xs bg-emerald-100 text-emerald-800 dark:bg-emerald-900/40 dark:text-emerald-200">
                                "✓ Certified organic"
                            </span>
                        })}
                    </div>
                }).collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_a_badge() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ] {
            assert!(status_class(status).starts_with("bg-"));
        }
    }
}
