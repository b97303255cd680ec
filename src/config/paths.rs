//! Path management for Spendwise
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDWISE_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/spendwise` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::SpendwiseError;

/// Environment variable that overrides the base directory
pub const CONFIG_DIR_ENV: &str = "SPENDWISE_CONFIG_DIR";

/// Manages the paths used by Spendwise
#[derive(Debug, Clone)]
pub struct SpendwisePaths {
    base_dir: PathBuf,
    settings_file: PathBuf,
}

impl SpendwisePaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if no home directory can be determined.
    pub fn new() -> Result<Self, SpendwiseError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            settings_file: base_dir.join("config.json"),
            base_dir,
        }
    }

    /// Paths for an explicit settings file; its parent becomes the base
    pub fn for_settings_file(file: impl Into<PathBuf>) -> Self {
        let settings_file = file.into();
        let base_dir = settings_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            base_dir,
            settings_file,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SpendwiseError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            SpendwiseError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check whether a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SpendwiseError> {
    ProjectDirs::from("", "", "spendwise")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SpendwiseError::Config("Could not determine a config directory".into()))
}
