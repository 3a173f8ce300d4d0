//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, typed payload decoding)
//!     → handlers.rs (dispatch to the registry)
//!     → response.rs (status + JSON message mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{CreateUserRequest, MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{ApiError, MessageResponse};
pub use server::{AppState, HttpServer};
