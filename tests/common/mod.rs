//! Shared utilities for integration and load testing.

use std::net::SocketAddr;

use tokio::task::JoinHandle;
use users_api::config::ServerConfig;
use users_api::lifecycle::{self, Shutdown};
use users_sdk::UsersClient;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> UsersClient {
        UsersClient::new(&self.url())
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) -> Result<(), std::io::Error> {
        self.shutdown.trigger();
        self.handle.await.expect("server task panicked")
    }
}

/// Start a server whose registry is seeded with `seed`.
pub async fn start_server(seed: &[&str]) -> TestServer {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.registry.seed_users = seed.iter().map(|s| s.to_string()).collect();
    start_with_config(config).await
}

pub async fn start_with_config(config: ServerConfig) -> TestServer {
    let (server, listener) = lifecycle::bind(config).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}
