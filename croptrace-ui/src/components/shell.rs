//! Page layout shared by the signed-in pages
//!
//! Navbar on top, a sidebar on the left, scrolling content on the right.

use chrono::Local;
use leptos::*;

use super::nav::Navbar;
use super::weather::WeatherWidget;
use crate::state::use_app_context;

#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen max-h-screen overflow-hidden bg-gradient-to-br from-[#F7F4EA] via-[#F0FDF4] to-[#EAF8EA] dark:from-gray-900 dark:via-gray-900 dark:to-gray-900">
            <Navbar />

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 flex gap-6 h-[calc(100vh-4rem)]">
                {children()}
            </div>
        </div>
    }
}

/// Left column: page navigation, a tip card, and the weather widget
#[component]
pub fn Sidebar(
    tip_title: &'static str,
    tip: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <aside class="hidden md:block w-64 bg-white/80 dark:bg-gray-800/80 backdrop-blur rounded-2xl border border-emerald-100 dark:border-gray-700 shadow-sm p-4 h-full sticky top-20 overflow-auto animate-slide-in">
            {children()}

            <div class="mt-6 p-4 rounded-xl bg-gradient-to-r from-emerald-50 to-lime-50 dark:from-gray-800 dark:to-gray-700 border border-emerald-100 dark:border-gray-700">
                <p class="text-sm text-emerald-800 dark:text-emerald-200">{tip_title}</p>
                <p class="text-xs text-emerald-700 mt-1 dark:text-emerald-300/80">{tip}</p>
            </div>

            <WeatherWidget />
        </aside>
    }
}

/// Scrolling main column with a greeting header and footer
#[component]
pub fn MainColumn(
    #[prop(into)]
    title: Signal<String>,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex-1 h-full overflow-auto">
            <div class="mb-6 animate-fade-in">
                <h1 class="text-3xl font-extrabold bg-gradient-to-r from-emerald-700 to-lime-600 bg-clip-text text-transparent">
                    {move || title.get()}
                </h1>
                <p class="text-emerald-700/80 dark:text-emerald-200/80 mt-1">{subtitle}</p>
            </div>

            {children()}

            <Footer />
        </div>
    }
}

/// Greeting that follows profile edits, e.g. `Welcome, Asha!`
pub fn welcome_title(fallback: &'static str) -> Signal<String> {
    let user = use_app_context().user;
    Signal::derive(move || {
        user.with(|u| {
            let name = u.as_ref().map(|u| u.display_name(fallback)).unwrap_or(fallback);
            format!("Welcome, {}!", name)
        })
    })
}

#[component]
fn Footer() -> impl IntoView {
    let app_name = use_app_context().config.ui.app_name.clone();
    let today = Local::now().format("%A, %B %-d, %Y").to_string();

    view! {
        <footer class="mt-10 py-4 border-t border-emerald-100 dark:border-gray-700 flex items-center justify-between text-xs text-emerald-700/70 dark:text-emerald-300/60">
            <span>{format!("{} · farm to shelf, traced", app_name)}</span>
            <span>{today}</span>
        </footer>
    }
}

/// Centered card for the signed-out pages
#[component]
pub fn AuthLayout(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    let app_name = use_app_context().config.ui.app_name.clone();

    view! {
        <div class="min-h-screen flex items-center justify-center px-4 py-10 bg-gradient-to-br from-[#F7F4EA] via-[#F0FDF4] to-[#EAF8EA] dark:from-gray-900 dark:via-gray-900 dark:to-gray-900">
            <div class="w-full max-w-md bg-white/90 dark:bg-gray-800/90 backdrop-blur rounded-2xl border border-emerald-100 dark:border-gray-700 shadow-xl p-8 animate-fade-in">
                <div class="text-center mb-8">
                    <div class="text-4xl mb-2">"🌾"</div>
                    <p class="text-sm font-semibold tracking-wide text-emerald-600 dark:text-emerald-400">{app_name}</p>
                    <h1 class="text-2xl font-bold text-emerald-900 dark:text-emerald-100 mt-1">{title}</h1>
                    <p class="text-sm text-emerald-700/80 dark:text-emerald-300/80 mt-1">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}
