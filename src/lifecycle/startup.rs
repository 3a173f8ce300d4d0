//! Startup orchestration.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::http::HttpServer;
use crate::observability::metrics;
use crate::registry::{RegistryError, UserRegistry};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid seed user: {0}")]
    Seed(#[from] RegistryError),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
}

/// Build the registry, start metrics and bind the listener.
///
/// Returns a server ready for [`HttpServer::run`] together with its listener.
pub async fn bind(config: ServerConfig) -> Result<(HttpServer, TcpListener), StartupError> {
    let registry = Arc::new(UserRegistry::with_users(&config.registry.seed_users)?);
    tracing::info!(users = registry.len(), "Registry initialized");

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    Ok((HttpServer::new(config, registry), listener))
}
