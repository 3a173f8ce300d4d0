//! Users API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ timeout/limit ─▶ router
//!                                                               │
//!                                   ┌───────────────────────────┤
//!                                   ▼                           ▼
//!                              GET /ping                 GET|POST /users
//!                                "pong"                        │
//!                                                              ▼
//!                                                        UserRegistry
//!                                                     (list / create)
//!     Client Response                                          │
//!     ◀──────────── status + JSON message ◀────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use users_api::config::{load_config, ServerConfig};
use users_api::lifecycle::{self, signals, Shutdown};
use users_api::observability::logging;

#[derive(Parser)]
#[command(name = "users-api")]
#[command(about = "In-memory user registry over HTTP", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_tracing(&config.observability);

    tracing::info!("users-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        seed_users = config.registry.seed_users.len(),
        "Configuration loaded"
    );

    let (server, listener) = lifecycle::bind(config).await.inspect_err(|e| {
        tracing::error!(error = %e, "Startup failed");
    })?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
