//! In-memory storage for tests and ephemeral carts.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{CartStorage, StorageError};

/// Key-value storage held in a process-local map.
///
/// `snapshot` exposes what was last written under a key so tests can assert
/// on the durable copy rather than the in-memory cart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw value currently stored under `key`, if any.
    #[must_use]
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl CartStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.snapshot(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_reflects_last_set() {
        let storage = MemoryStorage::new();
        assert!(storage.snapshot("k").is_none());

        storage.set("k", "v1").await.unwrap();
        storage.set("k", "v2").await.unwrap();
        assert_eq!(storage.snapshot("k").as_deref(), Some("v2"));
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("v2"));
    }
}
