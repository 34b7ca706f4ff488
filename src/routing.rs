//! Client-side routes and access gating
//!
//! Every route is gated on whether a user is signed in; `/dashboard`
//! additionally picks a view by role. [`resolve`] is the one place this
//! decision is made.

use std::fmt;

use crate::session::{DashboardKind, User};

/// A client-side route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Trace,
    Verification,
    Root,
    NotFound,
}

/// The page a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    ConsumerDashboard,
    RetailerDashboard,
    Dashboard,
    Trace,
    Verification,
    NotFound,
}

/// Outcome of gating a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(View),
    /// Navigate away, replacing the current history entry
    Redirect(Route),
}

impl Route {
    /// Every route with a fixed path
    pub const ALL: [Route; 6] = [
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Trace,
        Route::Verification,
        Route::Root,
    ];

    /// Match a location path. A single trailing slash is ignored.
    pub fn parse(path: &str) -> Self {
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        match path {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            "/trace" => Route::Trace,
            "/verification" => Route::Verification,
            "/" | "" => Route::Root,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Trace => "/trace",
            Route::Verification => "/verification",
            Route::Root => "/",
            Route::NotFound => "/*any",
        }
    }

    /// Whether the route requires a signed-in user
    pub fn is_protected(self) -> bool {
        matches!(self, Route::Dashboard | Route::Trace | Route::Verification)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Dashboard view for a role's dashboard kind
pub fn dashboard_view(kind: DashboardKind) -> View {
    match kind {
        DashboardKind::Consumer => View::ConsumerDashboard,
        DashboardKind::Retailer => View::RetailerDashboard,
        DashboardKind::Default => View::Dashboard,
    }
}

/// Decide what `route` shows for the current user
pub fn resolve(route: Route, user: Option<&User>) -> Resolution {
    let resolution = match (route, user) {
        (Route::Login, Some(_)) | (Route::Register, Some(_)) => {
            Resolution::Redirect(Route::Dashboard)
        }
        (Route::Login, None) => Resolution::Render(View::Login),
        (Route::Register, None) => Resolution::Render(View::Register),
        (Route::Dashboard, Some(user)) => Resolution::Render(dashboard_view(user.dashboard())),
        (Route::Trace, Some(_)) => Resolution::Render(View::Trace),
        (Route::Verification, Some(_)) => Resolution::Render(View::Verification),
        (Route::Root, Some(_)) => Resolution::Redirect(Route::Dashboard),
        (Route::Dashboard | Route::Trace | Route::Verification | Route::Root, None) => {
            Resolution::Redirect(Route::Login)
        }
        (Route::NotFound, _) => Resolution::Render(View::NotFound),
    };

    tracing::debug!(%route, authenticated = user.is_some(), ?resolution, "Resolved route");
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn test_parse_round_trips_paths() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), route);
        }
        assert_eq!(Route::parse("/trace/"), Route::Trace);
        assert_eq!(Route::parse("/Trace"), Route::NotFound);
        assert_eq!(Route::parse("/settings"), Route::NotFound);
    }

    #[test]
    fn test_signed_out_protected_routes_redirect_to_login() {
        for route in Route::ALL.into_iter().filter(|r| r.is_protected()) {
            assert_eq!(resolve(route, None), Resolution::Redirect(Route::Login));
        }
        assert_eq!(resolve(Route::Root, None), Resolution::Redirect(Route::Login));
    }

    #[test]
    fn test_signed_out_sees_forms() {
        assert_eq!(resolve(Route::Login, None), Resolution::Render(View::Login));
        assert_eq!(
            resolve(Route::Register, None),
            Resolution::Render(View::Register)
        );
    }

    #[test]
    fn test_dashboard_by_role() {
        let consumer = User::new("Asha").role(Role::Consumer);
        let retailer = User::new("Ravi").role(Role::Retailer);
        let farmer = User::new("Gopal").role(Role::Farmer);
        let unknown = User::new("Lee").role("Auditor");
        let no_role = User::new("Sam");

        assert_eq!(
            resolve(Route::Dashboard, Some(&consumer)),
            Resolution::Render(View::ConsumerDashboard)
        );
        assert_eq!(
            resolve(Route::Dashboard, Some(&retailer)),
            Resolution::Render(View::RetailerDashboard)
        );
        for user in [&farmer, &unknown, &no_role] {
            assert_eq!(
                resolve(Route::Dashboard, Some(user)),
                Resolution::Render(View::Dashboard)
            );
        }
    }

    #[test]
    fn test_signed_in_skips_forms() {
        let user = User::new("Asha").role(Role::Consumer);
        for route in [Route::Login, Route::Register, Route::Root] {
            assert_eq!(
                resolve(route, Some(&user)),
                Resolution::Redirect(Route::Dashboard)
            );
        }
        assert_eq!(
            resolve(Route::Trace, Some(&user)),
            Resolution::Render(View::Trace)
        );
        assert_eq!(
            resolve(Route::Verification, Some(&user)),
            Resolution::Render(View::Verification)
        );
    }

    #[test]
    fn test_unknown_path_renders_not_found() {
        assert_eq!(resolve(Route::NotFound, None), Resolution::Render(View::NotFound));
    }
}
