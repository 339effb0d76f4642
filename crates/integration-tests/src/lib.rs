//! Integration tests for Marketplace.
//!
//! Exercises the cart store against the real file-backed storage, across
//! store lifetimes, the way the application uses it: open, load, mutate,
//! drop, reopen.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marketplace-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use marketplace_cart::{CartConfig, CartScope, CartStore, FileStorage};
use marketplace_core::{Product, ProductId};
use rust_decimal::Decimal;

/// Build a product descriptor with deterministic fields for `id`.
#[must_use]
pub fn sample_product(id: &str, price: Decimal) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        image_url: format!("https://cdn.example.com/{id}.png"),
        price,
    }
}

/// Build a config pointing file storage at a test directory.
#[must_use]
pub fn test_config(dir: &Path) -> CartConfig {
    CartConfig {
        storage_dir: dir.to_path_buf(),
        namespace: "@MarketplaceTest".to_owned(),
    }
}

/// Open a scope over file storage in `dir`, as one application session.
#[must_use]
pub fn open_session(dir: &Path) -> CartScope<FileStorage> {
    let config = test_config(dir);
    let storage = FileStorage::new(&config.storage_dir);
    CartScope::new(CartStore::new(storage, &config))
}
