//! Marketplace Cart - the cart store and its storage backends.
//!
//! Holds the current cart contents in memory, mirrors every mutation to
//! durable local key-value storage, and exposes the contents and mutation
//! operations to consumers through a scoped handle.
//!
//! # Modules
//!
//! - [`store`] - The [`CartStore`]: load, add, increment, decrement
//! - [`scope`] - [`CartScope`]/[`CartHandle`]: controlled store lifetime
//! - [`storage`] - The [`CartStorage`] trait and its file/memory backends
//! - [`config`] - Environment-based configuration
//! - [`error`] - The [`CartError`] type
//!
//! # Example
//!
//! ```rust,no_run
//! use marketplace_cart::{CartConfig, CartScope, CartStore, FileStorage};
//! use marketplace_core::{Product, ProductId};
//! use rust_decimal::Decimal;
//!
//! # async fn run() -> Result<(), marketplace_cart::CartError> {
//! let config = CartConfig::default();
//! let storage = FileStorage::new(&config.storage_dir);
//! let scope = CartScope::new(CartStore::new(storage, &config));
//!
//! // Best-effort load of the previous session's cart.
//! if let Err(e) = scope.store().load().await {
//!     tracing::warn!("starting with an empty cart: {e}");
//! }
//!
//! let cart = scope.handle().store()?;
//! cart.add_to_cart(Product {
//!     id: ProductId::new("prod-1"),
//!     title: "Sun Hat".to_owned(),
//!     image_url: "https://cdn.example.com/hat.png".to_owned(),
//!     price: Decimal::new(1250, 2),
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod scope;
pub mod storage;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use error::CartError;
pub use scope::{CartHandle, CartScope};
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::CartStore;
