//! # CropTrace
//!
//! Core of the CropTrace produce-tracking dashboard: who is signed in, which
//! page they may see, and the static catalog the pages render.
//!
//! ## Modules
//!
//! - [`session`]: user record, role, theme, and their persistence
//! - [`storage`]: the key-value store sessions persist through
//! - [`routing`]: route table and role-based gating
//! - [`forms`]: sign-in, registration and profile input handling
//! - [`catalog`]: produce, inventory, farm, weather and trace data
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use croptrace::{resolve, Config, MemoryStore, Resolution, Role, Route, Session, User, View};
//!
//! let session = Session::new(MemoryStore::new(), &Config::default());
//! session.login(&User::new("Asha").role(Role::Consumer))?;
//!
//! let state = session.restore();
//! assert_eq!(
//!     resolve(Route::Dashboard, state.user.as_ref()),
//!     Resolution::Render(View::ConsumerDashboard),
//! );
//!
//! session.logout()?;
//! let state = session.restore();
//! assert_eq!(
//!     resolve(Route::Dashboard, state.user.as_ref()),
//!     Resolution::Redirect(Route::Login),
//! );
//! # Ok::<(), croptrace::StorageError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod forms;
pub mod routing;
pub mod session;
pub mod storage;

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig, StorageConfig, UiConfig};

pub use forms::{FormError, LoginForm, ProfileForm, RegisterForm};

pub use routing::{dashboard_view, resolve, Resolution, Route, View};

pub use session::{DashboardKind, Role, Session, SessionState, Theme, User};

pub use storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};
