//! Durable key-value storage for cart persistence.
//!
//! The store only ever needs two operations: read the whole serialized
//! collection and overwrite it. Backends are string-keyed and string-valued;
//! the store owns serialization.

pub mod file;
pub mod memory;

use std::future::Future;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Asynchronous string-keyed, string-valued storage.
pub trait CartStorage: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored under the key, which
    /// is indistinguishable from a cart that was never persisted.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Overwrite the value stored under `key`.
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}
