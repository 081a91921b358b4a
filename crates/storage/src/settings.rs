//! Settings capability for small persisted values
//!
//! The theme controller (and anything else that persists a single flag)
//! talks to storage through the [`SettingsStore`] trait rather than an
//! ambient backend, so it can be driven by an in-memory or mock store
//! in tests.

use crate::kv::{KvError, KvStore};
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Settings error types
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Underlying storage backend failed
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<KvError> for SettingsError {
    fn from(err: KvError) -> Self {
        SettingsError::Backend(err.to_string())
    }
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

/// String-valued settings capability
///
/// Implementations must be durable enough for their context: the sled
/// backing is durable across runs, the in-memory one lives for a test.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore: Send + Sync {
    /// Read a setting, `None` when unset
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a setting, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a setting, returning whether it existed
    fn remove(&self, key: &str) -> Result<bool>;
}

/// Sled-backed settings store
#[derive(Clone)]
pub struct KvSettings {
    store: KvStore,
}

impl KvSettings {
    /// Create a settings store over an open key-value store
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }
}

impl SettingsStore for KvSettings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.store.get(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(key, value, "persisting setting");
        self.store.set(key, &value.to_string())?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.store.remove(key)?)
    }
}

/// In-memory settings store for tests and ephemeral runs
#[derive(Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with key-value pairs
    pub fn with_values(pairs: &[(&str, &str)]) -> Self {
        let values = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { values: RwLock::new(values) }
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.values.write().remove(key).is_some())
    }
}
