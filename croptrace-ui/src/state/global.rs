//! Global Application State
//!
//! The signed-in user and theme live here, provided once at the root and
//! read by every page through [`use_app_context`].

use std::rc::Rc;

use croptrace::{Config, Session, Theme, User};
use leptos::*;

use super::local_storage::BrowserStore;

/// Application context provided to all components
#[derive(Clone)]
pub struct AppContext {
    /// Signed-in user; `None` means signed out
    pub user: RwSignal<Option<User>>,
    /// Active theme
    pub theme: RwSignal<Theme>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    pub config: Rc<Config>,
    session: Rc<Session<BrowserStore>>,
}

/// Restore the stored session and provide it to the component tree
pub fn provide_app_context(config: Config) -> AppContext {
    let session = Session::new(BrowserStore::open(), &config);
    let restored = session.restore();

    let ctx = AppContext {
        user: create_rw_signal(restored.user),
        theme: create_rw_signal(restored.theme),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        config: Rc::new(config),
        session: Rc::new(session),
    };

    // Apply and persist the theme whenever it changes, including the restored one
    let theme = ctx.theme;
    let session = ctx.session.clone();
    create_effect(move |_| {
        let theme = theme.get();
        apply_root_class(theme);
        if let Err(e) = session.save_theme(theme) {
            tracing::warn!("Could not save theme: {}", e);
        }
    });

    provide_context(ctx.clone());
    ctx
}

/// Fetch the application context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found")
}

fn apply_root_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };

    let result = match theme.root_class() {
        Some(class) => root.class_list().add_1(class),
        None => root.class_list().remove_1("dark"),
    };

    if let Err(e) = result {
        tracing::warn!("Could not update theme class: {:?}", e);
    }
}

impl AppContext {
    /// Sign in. The user stays signed in for this page even if storage
    /// refuses the write.
    pub fn login(&self, user: User) {
        if let Err(e) = self.session.login(&user) {
            self.show_error(&format!("Could not save session: {}", e));
        }
        self.user.set(Some(user));
    }

    pub fn logout(&self) {
        if let Err(e) = self.session.logout() {
            self.show_error(&format!("Could not clear session: {}", e));
        }
        self.user.set(None);
    }

    pub fn update_user(&self, user: User) {
        match self.session.update_user(&user) {
            Ok(()) => self.show_success("Profile updated"),
            Err(e) => self.show_error(&format!("Could not save profile: {}", e)),
        }
        self.user.set(Some(user));
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggle());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
