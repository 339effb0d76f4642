//! Scoped access to the cart store.
//!
//! A [`CartScope`] owns the store for as long as the hosting application
//! session runs; consumers hold [`CartHandle`]s. Using a handle after its
//! scope dropped is an integration mistake and surfaces as
//! [`CartError::ScopeClosed`] instead of silently operating on a default
//! cart.

use std::sync::{Arc, Weak};

use crate::error::CartError;
use crate::store::CartStore;

/// Owns a [`CartStore`] and bounds its lifetime.
pub struct CartScope<S> {
    store: Arc<CartStore<S>>,
}

impl<S> CartScope<S> {
    /// Take ownership of a store, opening the scope.
    #[must_use]
    pub fn new(store: CartStore<S>) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Direct access to the owned store.
    #[must_use]
    pub fn store(&self) -> &Arc<CartStore<S>> {
        &self.store
    }

    /// Create a handle for a consumer.
    ///
    /// Handles are cheap to clone and do not keep the store alive.
    #[must_use]
    pub fn handle(&self) -> CartHandle<S> {
        CartHandle {
            store: Arc::downgrade(&self.store),
        }
    }
}

/// A consumer's reference to the cart store.
pub struct CartHandle<S> {
    store: Weak<CartStore<S>>,
}

impl<S> CartHandle<S> {
    /// Resolve the handle to the store.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ScopeClosed` if the owning [`CartScope`] has
    /// been dropped.
    pub fn store(&self) -> Result<Arc<CartStore<S>>, CartError> {
        self.store.upgrade().ok_or(CartError::ScopeClosed)
    }
}

// Manual impl: `derive(Clone)` would needlessly require `S: Clone`.
impl<S> Clone for CartHandle<S> {
    fn clone(&self) -> Self {
        Self {
            store: Weak::clone(&self.store),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use marketplace_core::{Product, ProductId};
    use rust_decimal::Decimal;

    use super::CartScope;
    use crate::config::CartConfig;
    use crate::error::CartError;
    use crate::storage::MemoryStorage;
    use crate::store::CartStore;

    fn scope() -> CartScope<MemoryStorage> {
        CartScope::new(CartStore::new(MemoryStorage::new(), &CartConfig::default()))
    }

    #[tokio::test]
    async fn test_handle_resolves_while_scope_lives() {
        let scope = scope();
        let handle = scope.handle();

        let store = handle.store().unwrap();
        store
            .add_to_cart(Product {
                id: ProductId::new("A"),
                title: "A".to_owned(),
                image_url: String::new(),
                price: Decimal::ONE,
            })
            .await
            .unwrap();

        assert_eq!(scope.store().items().await.len(), 1);
    }

    #[test]
    fn test_handle_after_scope_drop_is_an_explicit_error() {
        let scope = scope();
        let handle = scope.handle();
        drop(scope);

        let err = handle.store().unwrap_err();
        assert!(matches!(err, CartError::ScopeClosed));
    }

    #[test]
    fn test_cloned_handles_share_the_scope() {
        let scope = scope();
        let first = scope.handle();
        let second = first.clone();

        assert!(first.store().is_ok());
        assert!(second.store().is_ok());
    }
}
