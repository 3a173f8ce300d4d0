//! User registry subsystem.
//!
//! # Data Flow
//! ```text
//! POST /users
//!     → handler decodes CreateUserRequest
//!     → store.rs create(name)
//!         → reject absent/empty name      (InvalidInput)
//!         → reject case-insensitive clash (DuplicateName)
//!         → append, preserving insertion order
//!
//! GET /users
//!     → store.rs list() → ordered names
//! ```
//!
//! # Design Decisions
//! - Owned by the composition root and injected into handlers, never global
//! - Names keep their original casing; uniqueness is checked on the lowercase form
//! - Append-only: no update or delete

pub mod error;
pub mod store;

pub use error::RegistryError;
pub use store::UserRegistry;
