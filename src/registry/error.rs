//! Registry validation errors.

use thiserror::Error;

/// Reasons a create can be rejected.
///
/// The display strings are the messages returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Name was absent or empty.
    #[error("Não é possível criar usuário sem nome")]
    InvalidInput,

    /// A name equal under case-insensitive comparison already exists.
    #[error("O nome de usuário já existe no banco de dados")]
    DuplicateName(String),
}

impl RegistryError {
    /// Short label used for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            RegistryError::InvalidInput => "invalid_input",
            RegistryError::DuplicateName(_) => "duplicate_name",
        }
    }
}
