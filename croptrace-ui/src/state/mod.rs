//! State Management
//!
//! Application context and its browser-backed persistence.

pub mod global;
pub mod local_storage;

pub use global::{provide_app_context, use_app_context};
