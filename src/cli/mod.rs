//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod analyze;
pub mod categorize;
pub mod demo;
pub mod serve;

pub use analyze::{handle_analyze_command, AnalyzeArgs, OutputFormat};
pub use categorize::{handle_categories_command, handle_categorize_command, CategorizeArgs};
pub use demo::handle_demo_command;
pub use serve::{handle_serve_command, ServeArgs};
