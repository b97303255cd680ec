//! `serve` command: run the HTTP API

use clap::Args;
use tracing::info;

use crate::api::{self, AppState};
use crate::config::Settings;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::storage::Storage;

/// Arguments for `serve`
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind (overrides settings)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides settings and PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Handle the serve command
pub fn handle_serve_command(
    storage: Storage,
    settings: &Settings,
    args: ServeArgs,
) -> SpendwiseResult<()> {
    let mut server = settings.server.clone();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    info!(
        environment = %settings.environment,
        address = %server.bind_address(),
        "Starting Spendwise API"
    );

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| SpendwiseError::Io(format!("Failed to start async runtime: {}", e)))?;

    runtime.block_on(api::serve(&server, AppState::new(storage)))
}
