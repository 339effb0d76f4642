//! Marketplace Core - Shared types library.
//!
//! This crate provides common types used across all Marketplace components:
//! - `cart` - The cart store and its storage backends
//! - `cli` - Command-line tools for inspecting and mutating the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no async
//! runtime. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product IDs and cart line items, with their wire-format
//!   serde representations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
