//! Cart management commands.
//!
//! Every command opens the file-backed cart, applies one operation through
//! a scope handle, and reports the resulting contents. Persistence happens
//! inside the store; by the time a command returns, durable storage already
//! reflects the mutation.

use marketplace_cart::{CartConfig, CartError, CartScope, CartStore, ConfigError, FileStorage};
use marketplace_core::{Product, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A cart store operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),
}

/// Show the current cart contents.
pub async fn show() -> Result<(), CartCommandError> {
    let scope = open().await?;
    let store = scope.handle().store()?;

    let items = store.items().await;
    if items.is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    tracing::info!("Cart ({} units):", store.total_quantity().await);
    for line in items {
        tracing::info!(
            "  {} x{} @ {} [{}]",
            line.title,
            line.quantity,
            line.price,
            line.id
        );
    }
    Ok(())
}

/// Add a product to the cart, incrementing it if already present.
pub async fn add(
    id: String,
    title: String,
    image_url: String,
    price: Decimal,
) -> Result<(), CartCommandError> {
    let scope = open().await?;
    let store = scope.handle().store()?;

    store
        .add_to_cart(Product {
            id: ProductId::new(id),
            title,
            image_url,
            price,
        })
        .await?;

    tracing::info!("Added. Cart now holds {} units", store.total_quantity().await);
    Ok(())
}

/// Increase a cart line's quantity by one.
pub async fn increment(id: &str) -> Result<(), CartCommandError> {
    let scope = open().await?;
    let store = scope.handle().store()?;

    store.increment(&ProductId::new(id)).await?;
    tracing::info!("Cart now holds {} units", store.total_quantity().await);
    Ok(())
}

/// Decrease a cart line's quantity by one, removing it at zero.
pub async fn decrement(id: &str) -> Result<(), CartCommandError> {
    let scope = open().await?;
    let store = scope.handle().store()?;

    store.decrement(&ProductId::new(id)).await?;
    tracing::info!("Cart now holds {} units", store.total_quantity().await);
    Ok(())
}

/// Open the file-backed cart and load the persisted contents.
///
/// Load failures are tolerated: the command continues with an empty cart,
/// exactly as the storefront does on a fresh install.
async fn open() -> Result<CartScope<FileStorage>, CartCommandError> {
    let config = CartConfig::from_env()?;
    let storage = FileStorage::new(&config.storage_dir);
    let scope = CartScope::new(CartStore::new(storage, &config));

    if let Err(e) = scope.store().load().await {
        tracing::warn!("Could not load persisted cart, starting empty: {e}");
    }

    Ok(scope)
}
