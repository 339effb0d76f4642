//! Cart line items and the product descriptor they are created from.
//!
//! # Wire format
//!
//! Cart contents are persisted as a JSON array of objects with the fields
//! `id`, `title`, `image_url`, `price` (number) and `quantity` (integer).
//! The snake_case `image_url` and the number-typed `price` are a
//! compatibility contract with previously persisted carts - do not rename
//! the fields or change `price` to a string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A product descriptor as handed to the cart by the catalog UI.
///
/// Carries everything a cart line needs except a quantity; adding it to
/// the cart assigns the initial quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier, unique per product.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price in the storefront's currency.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog identifier, unique within the cart.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price in the storefront's currency.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Number of units, always >= 1 while the line exists.
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart line for a product entering the cart for the first time.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: 1,
        }
    }
}

impl From<Product> for CartItem {
    fn from(product: Product) -> Self {
        Self::new(product)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new("gid://marketplace/Product/42"),
            title: "Pineapple Slicer".to_owned(),
            image_url: "https://cdn.example.com/slicer.png".to_owned(),
            price: Decimal::new(1999, 2),
        }
    }

    #[test]
    fn test_new_cart_item_starts_at_quantity_one() {
        let item = CartItem::new(sample_product());
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id.as_str(), "gid://marketplace/Product/42");
    }

    #[test]
    fn test_wire_format_field_names() {
        let item = CartItem::new(sample_product());
        let value = serde_json::to_value(&item).unwrap();

        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("title"));
        assert!(obj.contains_key("image_url"));
        assert!(obj.contains_key("price"));
        assert!(obj.contains_key("quantity"));
        assert_eq!(obj.len(), 5);
    }

    #[test]
    fn test_price_serializes_as_number() {
        let item = CartItem::new(sample_product());
        let value = serde_json::to_value(&item).unwrap();

        // Wire compatibility: price must be a JSON number, not a string.
        assert!(value.get("price").unwrap().is_number());
        assert!((value.get("price").unwrap().as_f64().unwrap() - 19.99).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_persisted_line() {
        let json = r#"{
            "id": "abc-123",
            "title": "Sun Hat",
            "image_url": "https://cdn.example.com/hat.png",
            "price": 12.5,
            "quantity": 3
        }"#;

        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ProductId::new("abc-123"));
        assert_eq!(item.price, Decimal::new(125, 1));
        assert_eq!(item.quantity, 3);
    }
}
