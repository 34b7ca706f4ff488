//! UI Components
//!
//! Reusable Leptos components for the dashboards.

pub mod batch;
pub mod form_field;
pub mod nav;
pub mod profile;
pub mod search_bar;
pub mod shell;
pub mod stat_tile;
pub mod tab_nav;
pub mod toast;
pub mod weather;

pub use batch::{BatchHeader, BatchTimeline};
pub use form_field::{RoleSelect, TextField};
pub use search_bar::{NoResults, SearchBar};
pub use shell::{welcome_title, AuthLayout, MainColumn, PageShell, Sidebar};
pub use stat_tile::StatTile;
pub use tab_nav::TabNav;
pub use toast::Toast;
