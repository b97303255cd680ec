//! User settings for Spendwise
//!
//! Settings are read from `config.json` (every field optional), then
//! overridden by environment variables, then by command-line flags.

use serde::{Deserialize, Serialize};

use super::paths::SpendwisePaths;
use crate::error::SpendwiseError;
use crate::models::{default_categories, Category, CurrencyFormat};

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// `host:port` string to bind to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// User settings for Spendwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    /// Locale used for currency text (`pt-BR` or `en-US`)
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Default tracing filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Deployment environment name, informational only
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Categories in priority order; replaces the built-in set when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
}

fn default_locale() -> String {
    "pt-BR".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            locale: default_locale(),
            log_level: default_log_level(),
            environment: default_environment(),
            categories: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &SpendwisePaths) -> Result<Self, SpendwiseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(settings_path)
            .map_err(|e| SpendwiseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            SpendwiseError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.currency_format()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendwisePaths) -> Result<(), SpendwiseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendwiseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendwiseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Apply `PORT`, `SPENDWISE_HOST`, `SPENDWISE_LOCALE` and `SPENDWISE_ENV`
    pub fn apply_env(&mut self) -> Result<(), SpendwiseError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), SpendwiseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| SpendwiseError::Config(format!("Invalid PORT value: {}", port)))?;
        }
        if let Some(host) = lookup("SPENDWISE_HOST") {
            self.server.host = host;
        }
        if let Some(locale) = lookup("SPENDWISE_LOCALE") {
            self.locale = locale;
        }
        if let Some(environment) = lookup("SPENDWISE_ENV") {
            self.environment = environment;
        }

        self.currency_format()?;
        Ok(())
    }

    /// Currency conventions for the configured locale
    pub fn currency_format(&self) -> Result<CurrencyFormat, SpendwiseError> {
        CurrencyFormat::for_locale(&self.locale)
    }

    /// Categories to seed the store with, in priority order
    pub fn seed_categories(&self) -> Vec<Category> {
        self.categories.clone().unwrap_or_else(default_categories)
    }
}
