//! Navigation Component
//!
//! Header bar with brand, page links, theme toggle and the user menu.

use croptrace::{Route as AppRoute, Theme};
use leptos::*;
use leptos_router::*;

use super::profile::ProfileModal;
use crate::state::use_app_context;

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let app_name = ctx.config.ui.app_name.clone();
    let (show_profile, set_show_profile) = create_signal(false);

    let user = ctx.user;
    let theme = ctx.theme;

    let ctx_for_theme = ctx.clone();
    let ctx_for_logout = ctx;

    view! {
        <nav class="h-16 bg-white/80 dark:bg-gray-800/80 backdrop-blur border-b border-emerald-100 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href=AppRoute::Dashboard.path() class="flex items-center space-x-3">
                        <span class="text-2xl">"🌾"</span>
                        <span class="text-xl font-bold bg-gradient-to-r from-emerald-700 to-lime-600 bg-clip-text text-transparent">
                            {app_name}
                        </span>
                    </A>

                    // Navigation links
                    <div class="hidden sm:flex items-center space-x-1">
                        <NavLink route=AppRoute::Dashboard label="Dashboard" />
                        <NavLink route=AppRoute::Trace label="Trace" />
                        <NavLink route=AppRoute::Verification label="Verify" />
                    </div>

                    <div class="flex items-center space-x-3">
                        // Theme toggle
                        <button
                            on:click=move |_| ctx_for_theme.toggle_theme()
                            title="Toggle theme"
                            class="w-10 h-10 rounded-xl flex items-center justify-center hover:bg-emerald-50 dark:hover:bg-gray-700 transition-colors"
                        >
                            {move || match theme.get() {
                                Theme::Light => "🌙",
                                Theme::Dark => "☀️",
                            }}
                        </button>

                        // User badge opens the profile editor
                        <button
                            on:click=move |_| set_show_profile.set(true)
                            class="flex items-center space-x-2 px-2 py-1 rounded-xl hover:bg-emerald-50 dark:hover:bg-gray-700 transition-colors"
                        >
                            <span class="w-8 h-8 rounded-full bg-emerald-600 text-white text-sm font-semibold flex items-center justify-center">
                                {move || user.with(|u| u.as_ref().map(|u| u.initials()).unwrap_or_default())}
                            </span>
                            <span class="hidden md:block text-left">
                                <span class="block text-sm font-medium text-emerald-900 dark:text-emerald-100">
                                    {move || user.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default())}
                                </span>
                                <span class="block text-xs text-emerald-700/70 dark:text-emerald-300/70">
                                    {move || user.with(|u| {
                                        u.as_ref()
                                            .and_then(|u| u.role.as_ref())
                                            .map(|r| r.to_string())
                                            .unwrap_or_default()
                                    })}
                                </span>
                            </span>
                        </button>

                        <button
                            on:click=move |_| ctx_for_logout.logout()
                            class="px-4 py-2 rounded-xl text-sm font-medium text-emerald-700 dark:text-emerald-200 border border-emerald-200 dark:border-gray-600 hover:bg-emerald-50 dark:hover:bg-gray-700 transition-colors"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>

        {move || {
            if show_profile.get() {
                view! { <ProfileModal on_close=move || set_show_profile.set(false) /> }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    route: AppRoute,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=route.path()
            class="px-4 py-2 rounded-xl text-emerald-800/80 dark:text-emerald-100/80 hover:bg-emerald-50 dark:hover:bg-gray-700 transition-colors"
            active_class="bg-emerald-100 text-emerald-700 dark:bg-gray-700 dark:text-emerald-100"
        >
            {label}
        </A>
    }
}
