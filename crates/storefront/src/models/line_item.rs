//! Cart line item and the catalog data it is built from.

use serde::{Deserialize, Serialize};

use meridian_core::{Price, ProductId, Quantity};

/// Catalog data for a product, as supplied by the caller.
///
/// The cart does not validate this beyond using the id for equality;
/// the catalog is trusted to supply sensible names, prices, and image
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier, unique within the catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image reference (a relative path or URL - opaque to the cart).
    pub image: String,
}

/// One cart entry: a product plus how many units of it are in the cart.
///
/// At most one line item exists per product id; adding the same product
/// again increments the quantity instead of appending a second line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique within the cart.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image reference.
    pub image: String,
    /// Units in the cart, always >= 1.
    pub quantity: Quantity,
}

impl From<Product> for LineItem {
    /// A freshly added product enters the cart with quantity 1.
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            quantity: Quantity::ONE,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_item_has_quantity_one() {
        let product = Product {
            id: ProductId::new("watch2"),
            name: "Model Two".to_owned(),
            price: "2495.99".parse().unwrap(),
            image: "Time/model-two.jpeg".to_owned(),
        };
        let line = LineItem::from(product);
        assert_eq!(line.quantity, Quantity::ONE);
    }

    #[test]
    fn test_serde_uses_storage_field_names() {
        let line = LineItem {
            id: ProductId::new("watch5"),
            name: "Model Five".to_owned(),
            price: "3995.99".parse().unwrap(),
            image: "Time/model-five.jpeg".to_owned(),
            quantity: Quantity::new(2).unwrap(),
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["id"], "watch5");
        assert_eq!(json["quantity"], 2);

        let back: LineItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, line);
    }
}
