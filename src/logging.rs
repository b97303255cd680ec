//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level is used.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
