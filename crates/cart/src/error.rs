//! Error types for the cart store.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by cart store operations.
///
/// Persistence is best-effort: when a mutation returns a `Storage` error the
/// in-memory change has already been applied, and the durable copy catches
/// up on the next successful write.
#[derive(Debug, Error)]
pub enum CartError {
    /// Durable storage read or write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Previously persisted cart data could not be deserialized.
    #[error("persisted cart data is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// The cart contents could not be serialized for persistence.
    #[error("failed to serialize cart contents: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A handle was used after its owning scope was dropped.
    #[error("cart scope is closed")]
    ScopeClosed,
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
