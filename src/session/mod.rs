//! Session state: who is signed in, with which role, under which theme

pub mod role;
pub mod store;
pub mod theme;
pub mod user;

pub use role::{DashboardKind, Role};
pub use store::{Session, SessionState};
pub use theme::{Theme, UnknownTheme};
pub use user::{NotAnObject, User};
