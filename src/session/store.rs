//! Session persistence
//!
//! Reads and writes the signed-in user and the theme preference through a
//! [`KeyValueStore`]. Stored state is never trusted: a user record that
//! fails to parse is dropped and the session starts signed out.

use crate::config::Config;
use crate::storage::{KeyValueStore, StorageResult};

use super::theme::Theme;
use super::user::User;

/// State recovered from storage on start-up
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub theme: Theme,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Persisted session over a key-value store
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    user_key: String,
    theme_key: String,
    default_theme: Theme,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            user_key: config.storage.user_key.clone(),
            theme_key: config.storage.theme_key.clone(),
            default_theme: config.ui.default_theme,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored user and theme
    pub fn restore(&self) -> SessionState {
        SessionState {
            user: self.restore_user(),
            theme: self.restore_theme(),
        }
    }

    fn restore_user(&self) -> Option<User> {
        let raw = match self.store.get_item(&self.user_key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Could not read stored user: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                tracing::debug!(role = ?user.role, "Restored session");
                Some(user)
            }
            Err(e) => {
                tracing::warn!(key = %self.user_key, "Discarding malformed stored user: {}", e);
                if let Err(e) = self.store.remove_item(&self.user_key) {
                    tracing::warn!("Could not clear malformed user: {}", e);
                }
                None
            }
        }
    }

    fn restore_theme(&self) -> Theme {
        match self.store.get_item(&self.theme_key) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, self.default_theme);
                self.default_theme
            }),
            Ok(None) => self.default_theme,
            Err(e) => {
                tracing::warn!("Could not read stored theme: {}", e);
                self.default_theme
            }
        }
    }

    /// Persist a newly signed-in user
    pub fn login(&self, user: &User) -> StorageResult<()> {
        self.write_user(user)?;
        tracing::info!(role = ?user.role, "User signed in");
        Ok(())
    }

    /// Replace the stored user record after a profile edit
    pub fn update_user(&self, user: &User) -> StorageResult<()> {
        self.write_user(user)
    }

    /// Clear the stored user
    pub fn logout(&self) -> StorageResult<()> {
        self.store.remove_item(&self.user_key)?;
        tracing::info!("User signed out");
        Ok(())
    }

    pub fn save_theme(&self, theme: Theme) -> StorageResult<()> {
        self.store.set_item(&self.theme_key, theme.as_str())
    }

    fn write_user(&self, user: &User) -> StorageResult<()> {
        let json = serde_json::to_string(user)?;
        self.store.set_item(&self.user_key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{resolve, Resolution, Route, View};
    use crate::session::Role;
    use crate::storage::MemoryStore;

    fn session(store: MemoryStore) -> Session<MemoryStore> {
        Session::new(store, &Config::default())
    }

    #[test]
    fn test_empty_store_is_signed_out_light() {
        let state = session(MemoryStore::new()).restore();
        assert!(!state.is_authenticated());
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_login_then_reload() {
        let store = std::rc::Rc::new(MemoryStore::new());
        let first = Session::new(store.clone(), &Config::default());
        let user = User::new("Asha").role(Role::Consumer);
        first.login(&user).unwrap();

        let reloaded = Session::new(store, &Config::default()).restore();
        assert_eq!(reloaded.user, Some(user));
    }

    #[test]
    fn test_malformed_user_is_signed_out_and_cleared() {
        let store = MemoryStore::new().with_item("cropAppUser", "{\"name\": ");
        let session = session(store);

        let state = session.restore();
        assert!(!state.is_authenticated());
        assert_eq!(session.store().get_item("cropAppUser").unwrap(), None);
    }

    #[test]
    fn test_non_object_user_is_signed_out_and_cleared() {
        let session = session(MemoryStore::new().with_item("cropAppUser", "[\"Asha\"]"));

        assert!(!session.restore().is_authenticated());
        assert_eq!(session.store().get_item("cropAppUser").unwrap(), None);
    }

    #[test]
    fn test_loosely_typed_user_still_restores() {
        let raw = r#"{"name":null,"role":"Consumer"}"#;
        let consumer = session(MemoryStore::new().with_item("cropAppUser", raw));

        let state = consumer.restore();
        assert_eq!(
            resolve(Route::Dashboard, state.user.as_ref()),
            Resolution::Render(View::ConsumerDashboard)
        );
        assert_eq!(consumer.store().get_item("cropAppUser").unwrap().as_deref(), Some(raw));

        let raw = r#"{"name":"Ravi","role":"Retailer","phone":9820000000}"#;
        let state = session(MemoryStore::new().with_item("cropAppUser", raw)).restore();
        assert_eq!(
            resolve(Route::Dashboard, state.user.as_ref()),
            Resolution::Render(View::RetailerDashboard)
        );
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let store = MemoryStore::new().with_item("theme", "purple");
        let mut config = Config::default();
        config.ui.default_theme = Theme::Dark;

        let state = Session::new(store, &config).restore();
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_theme_toggle_persists_across_reload() {
        let store = std::rc::Rc::new(MemoryStore::new());
        let session = Session::new(store.clone(), &Config::default());

        let theme = session.restore().theme.toggle();
        session.save_theme(theme).unwrap();
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));

        let reloaded = Session::new(store, &Config::default()).restore();
        assert_eq!(reloaded.theme, Theme::Dark);
    }

    #[test]
    fn test_logout_then_protected_routes_redirect() {
        let store = std::rc::Rc::new(MemoryStore::new());
        let session = Session::new(store.clone(), &Config::default());
        session.login(&User::new("Ravi").role(Role::Retailer)).unwrap();

        let state = session.restore();
        assert_eq!(
            resolve(Route::Dashboard, state.user.as_ref()),
            Resolution::Render(View::RetailerDashboard)
        );

        session.logout().unwrap();
        let state = Session::new(store, &Config::default()).restore();
        for route in [Route::Dashboard, Route::Trace, Route::Verification] {
            assert_eq!(
                resolve(route, state.user.as_ref()),
                Resolution::Redirect(Route::Login)
            );
        }
    }

    #[test]
    fn test_update_user_keeps_role_and_custom_keys() {
        let store = MemoryStore::new().with_item(
            "user",
            r#"{"name":"Ravi","role":"Retailer","storeName":"Green Mart"}"#,
        );
        let mut config = Config::default();
        config.storage.user_key = "user".to_string();
        let session = Session::new(store, &config);

        let mut user = session.restore().user.unwrap();
        user.name = "Ravi K".to_string();
        session.update_user(&user).unwrap();

        let reloaded = session.restore().user.unwrap();
        assert_eq!(reloaded.name, "Ravi K");
        assert_eq!(reloaded.role, Some(Role::Retailer));
        assert!(reloaded.extra.contains_key("storeName"));
    }
}
