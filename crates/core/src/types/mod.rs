//! Core types for Marketplace.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;

pub use cart::{CartItem, Product};
pub use id::ProductId;
