//! Configuration loading and management.
//!
//! Loads configuration from embedded config.toml with environment variable overrides.

use serde::Deserialize;
use std::env;

use crate::error::ConfigError;

/// Embedded configuration file content.
const CONFIG_TOML: &str = include_str!("../config.toml");

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub status_item: StatusItemConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct AppConfig {
    pub name: String,
    pub bundle_identifier: String,
}

/// Appearance of the menu bar icon.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub struct StatusItemConfig {
    pub symbol: String,
    pub accessibility_description: String,
    pub fallback_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: String,
}

impl Config {
    /// Load configuration from embedded config.toml with environment variable overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(CONFIG_TOML, |key| env::var(key).ok())
    }

    /// Parse `toml` and apply overrides looked up through `var`.
    fn from_sources(
        toml: &str,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(toml)?;

        if let Some(symbol) = var("DISKJOCKEY_STATUS_SYMBOL") {
            config.status_item.symbol = symbol;
        }

        // RUST_LOG is read directly by the log filter, not copied here
        if let Some(level) = var("DISKJOCKEY_LOG_LEVEL").filter(|v| !v.trim().is_empty()) {
            config.logging.level = level;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate that required configuration is present.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.status_item.symbol.trim().is_empty() {
            return Err(ConfigError::Missing("status_item.symbol"));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Missing("logging.level"));
        }

        Ok(())
    }
}
