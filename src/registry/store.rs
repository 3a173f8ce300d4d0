//! In-memory user store.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use crate::registry::error::RegistryError;

#[derive(Debug, Default)]
struct Users {
    /// Accepted names in insertion order.
    names: Vec<String>,
    /// Lowercase form of every entry in `names`.
    keys: HashSet<String>,
}

/// Ordered, append-only set of user names, unique case-insensitively.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: RwLock<Users>,
}

impl UserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with `names`, each validated as if created in order.
    pub fn with_users<I, S>(names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = Self::new();
        for name in names {
            registry.create(Some(name.as_ref()))?;
        }
        Ok(registry)
    }

    /// All names in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .names
            .clone()
    }

    /// Validate and append `name`, returning the accepted name.
    pub fn create(&self, name: Option<&str>) -> Result<String, RegistryError> {
        let name = match name {
            Some(n) if !n.is_empty() => n,
            _ => return Err(RegistryError::InvalidInput),
        };

        let key = name.to_lowercase();
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.keys.contains(&key) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }

        users.keys.insert(key);
        users.names.push(name.to_string());
        Ok(name.to_string())
    }

    /// Whether a name matching `name` case-insensitively exists.
    pub fn contains(&self, name: &str) -> bool {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys
            .contains(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .names
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
