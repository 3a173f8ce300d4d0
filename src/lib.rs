//! Users API Library
//!
//! A small HTTP service with a health check and an in-memory user registry.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod registry;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use registry::{RegistryError, UserRegistry};
