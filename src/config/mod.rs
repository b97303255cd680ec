//! Configuration module for Spendwise
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - Settings persistence with environment overrides

pub mod paths;
pub mod settings;

pub use paths::SpendwisePaths;
pub use settings::{ServerSettings, Settings};
