//! CropTrace Dashboard
//!
//! Produce tracking dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Role-based dashboards for consumers, retailers and farmers
//! - Batch traceability timeline and certificate verification
//! - Light/dark theme remembered across visits
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no server: the signed-in user and the theme are kept
//! in browser `localStorage`, and all catalog data ships with the bundle.

use croptrace::Config;
use leptos::*;

mod app;
mod components;
mod logging;
mod pages;
mod state;

const EMBEDDED_CONFIG: &str = include_str!("../croptrace.toml");

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = load_config();
    logging::init(&config.logging);
    tracing::info!("CropTrace dashboard v{}", env!("CARGO_PKG_VERSION"));

    mount_to_body(move || view! { <app::App config=config /> });
}

/// Embedded TOML plus any `CROPTRACE_*` variables set when the bundle was built
///
/// Runs before logging is installed, so problems go straight to the console.
fn load_config() -> Config {
    let mut config = Config::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("{}; using defaults", e).into());
        Config::default()
    });

    let overrides = [
        ("CROPTRACE_USER_KEY", option_env!("CROPTRACE_USER_KEY")),
        ("CROPTRACE_THEME_KEY", option_env!("CROPTRACE_THEME_KEY")),
        ("CROPTRACE_DEFAULT_THEME", option_env!("CROPTRACE_DEFAULT_THEME")),
        ("CROPTRACE_LOG_LEVEL", option_env!("CROPTRACE_LOG_LEVEL")),
    ];

    let set = overrides
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)));
    if let Err(e) = config.apply_overrides(set) {
        web_sys::console::warn_1(&format!("Ignoring override: {}", e).into());
    }

    config
}
