//! Pages
//!
//! Top-level page components for each route.

pub mod consumer;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod retailer;
pub mod trace;
pub mod verification;

pub use consumer::ConsumerDashboard;
pub use dashboard::Dashboard;
pub use login::Login;
pub use register::Register;
pub use retailer::RetailerDashboard;
pub use trace::Trace;
pub use verification::Verification;
