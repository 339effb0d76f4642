//! The cart store: in-memory cart contents mirrored to durable storage.

use marketplace_core::{CartItem, Product, ProductId};
use tokio::sync::Mutex;

use crate::config::CartConfig;
use crate::error::CartError;
use crate::storage::CartStorage;

/// Holds the current cart contents and mirrors every mutation to storage.
///
/// The collection is insertion-ordered (the order products were first
/// added) and holds at most one line per product ID. All mutation methods
/// take `&self`; the contents live behind an async mutex that is held
/// across the storage write, so the durable copy always receives the
/// freshly computed collection and writes land in mutation order.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
    items: Mutex<Vec<CartItem>>,
}

impl<S: CartStorage> CartStore<S> {
    /// Create an empty store persisting under the configured storage key.
    #[must_use]
    pub fn new(storage: S, config: &CartConfig) -> Self {
        Self {
            storage,
            key: config.storage_key(),
            items: Mutex::new(Vec::new()),
        }
    }

    /// Replace the in-memory contents with the persisted cart, if any.
    ///
    /// Intended to run once at startup, possibly in the background;
    /// consumers may observe an empty cart until it completes. A missing
    /// key is a normal first run and leaves the cart empty.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the read fails and
    /// `CartError::Corrupt` if the persisted blob does not deserialize.
    /// In both cases the in-memory contents are left untouched; callers
    /// typically log a warning and continue with an empty cart.
    pub async fn load(&self) -> Result<(), CartError> {
        let Some(raw) = self.storage.get(&self.key).await? else {
            tracing::debug!(key = %self.key, "no persisted cart found");
            return Ok(());
        };

        let loaded: Vec<CartItem> = serde_json::from_str(&raw).map_err(CartError::Corrupt)?;
        tracing::debug!(key = %self.key, lines = loaded.len(), "loaded persisted cart");

        *self.items.lock().await = loaded;
        Ok(())
    }

    /// Add a product to the cart.
    ///
    /// A product not yet in the cart is appended as a new line with
    /// quantity 1. A product already in the cart is never duplicated;
    /// adding it again increments the existing line instead.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if persisting fails; the in-memory
    /// change has been applied regardless.
    pub async fn add_to_cart(&self, product: Product) -> Result<(), CartError> {
        let mut items = self.items.lock().await;

        if let Some(line) = items.iter_mut().find(|line| line.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(id = %product.id, quantity = line.quantity, "product already in cart, incremented");
        } else {
            tracing::debug!(id = %product.id, "added product to cart");
            items.push(CartItem::new(product));
        }

        self.persist(&items).await
    }

    /// Increase the quantity of the line with the given ID by one.
    ///
    /// Unknown IDs are a no-op: nothing changes and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if persisting fails.
    pub async fn increment(&self, id: &ProductId) -> Result<(), CartError> {
        let mut items = self.items.lock().await;

        let Some(line) = items.iter_mut().find(|line| line.id == *id) else {
            tracing::debug!(id = %id, "increment for product not in cart, ignoring");
            return Ok(());
        };

        line.quantity = line.quantity.saturating_add(1);
        tracing::debug!(id = %id, quantity = line.quantity, "incremented");

        self.persist(&items).await
    }

    /// Decrease the quantity of the line with the given ID by one.
    ///
    /// A line reaching quantity 0 is removed entirely; quantities are
    /// never persisted as zero. Unknown IDs are a no-op: nothing changes
    /// and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if persisting fails.
    pub async fn decrement(&self, id: &ProductId) -> Result<(), CartError> {
        let mut items = self.items.lock().await;

        let Some(pos) = items.iter().position(|line| line.id == *id) else {
            tracing::debug!(id = %id, "decrement for product not in cart, ignoring");
            return Ok(());
        };

        let Some(line) = items.get_mut(pos) else {
            return Ok(());
        };
        if line.quantity > 1 {
            line.quantity -= 1;
            tracing::debug!(id = %id, quantity = line.quantity, "decremented");
        } else {
            items.remove(pos);
            tracing::debug!(id = %id, "quantity reached zero, removed from cart");
        }

        self.persist(&items).await
    }

    /// A snapshot of the current cart lines, in insertion order.
    pub async fn items(&self) -> Vec<CartItem> {
        self.items.lock().await.clone()
    }

    /// Total number of units across all lines (the cart badge count).
    pub async fn total_quantity(&self) -> u32 {
        self.items
            .lock()
            .await
            .iter()
            .map(|line| line.quantity)
            .sum()
    }

    /// Whether the cart currently has no lines.
    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }

    /// The storage key this store persists under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// The storage backend this store writes to.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Rewrite the full collection to durable storage.
    ///
    /// Callers hold the items lock across this call, so the serialized
    /// value is always the freshly computed collection, never a snapshot
    /// captured before the mutation.
    async fn persist(&self, items: &[CartItem]) -> Result<(), CartError> {
        let raw = serde_json::to_string(items).map_err(CartError::Serialize)?;
        self.storage.set(&self.key, &raw).await?;
        Ok(())
    }
}
