//! Configuration System
//!
//! Dashboard configuration is TOML, embedded into the web bundle at build
//! time. `CROPTRACE_*` variables override individual settings.

use serde::Deserialize;

use crate::session::Theme;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Local storage key names
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_user_key")]
    pub user_key: String,

    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

fn default_user_key() -> String {
    "cropAppUser".to_string()
}

fn default_theme_key() -> String {
    "theme".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            user_key: default_user_key(),
            theme_key: default_theme_key(),
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Theme used when nothing valid is stored
    #[serde(default)]
    pub default_theme: Theme,

    /// Retail stock at or below this count is flagged as low
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_app_name() -> String {
    "CropTrace".to_string()
}

fn default_low_stock_threshold() -> u32 {
    20
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            default_theme: Theme::default(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `croptrace=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `CROPTRACE_*` overrides
    ///
    /// Unknown names are ignored. An unrecognised theme is rejected and
    /// leaves the current value in place.
    pub fn apply_overrides<I, K, V>(&mut self, vars: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in vars {
            let value = value.into();
            match name.as_ref() {
                "CROPTRACE_USER_KEY" => self.storage.user_key = value,
                "CROPTRACE_THEME_KEY" => self.storage.theme_key = value,
                "CROPTRACE_DEFAULT_THEME" => {
                    self.ui.default_theme = value.parse().map_err(|_| ConfigError::Invalid {
                        name: "CROPTRACE_DEFAULT_THEME".to_string(),
                        value,
                    })?;
                }
                "CROPTRACE_LOG_LEVEL" => self.logging.level = value,
                _ => {}
            }
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# CropTrace Configuration
#
# Embedded at build time. Build-time environment variables override:
# - CROPTRACE_USER_KEY
# - CROPTRACE_THEME_KEY
# - CROPTRACE_DEFAULT_THEME
# - CROPTRACE_LOG_LEVEL

[storage]
# localStorage key holding the signed-in user (JSON)
user_key = "cropAppUser"

# localStorage key holding the theme preference
theme_key = "theme"

[ui]
app_name = "CropTrace"

# Theme used when none is stored: light or dark
default_theme = "light"

# Retail stock at or below this count is flagged
low_stock_threshold = 20

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let config = Config::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        let config = Config::from_toml_str("[ui]\ndefault_theme = \"dark\"\n").unwrap();
        assert_eq!(config.ui.default_theme, Theme::Dark);
        assert_eq!(config.ui.low_stock_threshold, 20);
        assert_eq!(config.storage.user_key, "cropAppUser");
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let err = Config::from_toml_str("[ui]\ndefault_theme = \"sepia\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides([
                ("CROPTRACE_USER_KEY", "user"),
                ("CROPTRACE_LOG_LEVEL", "debug"),
                ("HOME", "/root"),
            ])
            .unwrap();
        assert_eq!(config.storage.user_key, "user");
        assert_eq!(config.logging.level, "debug");

        let err = config
            .apply_overrides([("CROPTRACE_DEFAULT_THEME", "sepia")])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for CROPTRACE_DEFAULT_THEME: sepia"
        );
        assert_eq!(config.ui.default_theme, Theme::Light);
    }
}
