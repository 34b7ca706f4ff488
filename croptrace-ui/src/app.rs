//! App Root Component
//!
//! Main application component with routing and global providers.

use croptrace::{resolve, Config, Resolution, Route as AppRoute, View as Page};
use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{
    ConsumerDashboard, Dashboard, Login, Register, RetailerDashboard, Trace, Verification,
};
use crate::state::{provide_app_context, use_app_context};

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    // Provide the application context to all components
    provide_app_context(config);

    view! {
        <Router>
            <div class="min-h-screen max-h-screen overflow-hidden bg-gray-50 dark:bg-gray-900 transition-colors">
                <Routes>
                    <Route path="/login" view=|| view! { <Gate route=AppRoute::Login /> } />
                    <Route path="/register" view=|| view! { <Gate route=AppRoute::Register /> } />
                    <Route path="/dashboard" view=|| view! { <Gate route=AppRoute::Dashboard /> } />
                    <Route path="/trace" view=|| view! { <Gate route=AppRoute::Trace /> } />
                    <Route path="/verification" view=|| view! { <Gate route=AppRoute::Verification /> } />
                    <Route path="/" view=|| view! { <Gate route=AppRoute::Root /> } />
                    <Route path="/*any" view=|| view! { <Gate route=AppRoute::NotFound /> } />
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Renders a route's page, or redirects when the current user may not see it
///
/// Re-evaluates whenever the user signs in or out, so logging out anywhere
/// lands on the login page.
#[component]
fn Gate(route: AppRoute) -> impl IntoView {
    let ctx = use_app_context();
    let user = ctx.user;

    let resolution = create_memo(move |_| user.with(|u| resolve(route, u.as_ref())));

    move || match resolution.get() {
        Resolution::Render(page) => render_page(page),
        Resolution::Redirect(to) => view! {
            <Redirect
                path=to.path()
                options=NavigateOptions { replace: true, ..Default::default() }
            />
        }
        .into_view(),
    }
}

fn render_page(page: Page) -> View {
    match page {
        Page::Login => view! { <Login /> }.into_view(),
        Page::Register => view! { <Register /> }.into_view(),
        Page::ConsumerDashboard => view! { <ConsumerDashboard /> }.into_view(),
        Page::RetailerDashboard => view! { <RetailerDashboard /> }.into_view(),
        Page::Dashboard => view! { <Dashboard /> }.into_view(),
        Page::Trace => view! { <Trace /> }.into_view(),
        Page::Verification => view! { <Verification /> }.into_view(),
        Page::NotFound => view! { <NotFound /> }.into_view(),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center px-4">
            <div class="text-6xl mb-4">"🌱"</div>
            <h1 class="text-3xl font-bold mb-2 text-emerald-900 dark:text-emerald-100">"Page Not Found"</h1>
            <p class="text-emerald-700/80 dark:text-emerald-200/80 mb-6">
                "The page you're looking for doesn't exist."
            </p>
            <A
                href="/"
                class="px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-xl font-medium transition-colors"
            >
                "Go home"
            </A>
        </div>
    }
}
