//! Cart commands.

use meridian_core::{Price, ProductId};
use meridian_storefront::Product;
use meridian_storefront::config::StorefrontConfig;

use super::load_cart;

/// Add one unit of a product to the cart.
pub fn add(
    config: &StorefrontConfig,
    id: &str,
    name: &str,
    price: &str,
    image: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let price: Price = price
        .parse()
        .map_err(|e| format!("invalid --price value: {e}"))?;

    let mut cart = load_cart(config)?;
    cart.add(Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price,
        image: image.to_owned(),
    })?;

    tracing::info!("Added {id} to cart ({} items total)", cart.total_count());
    Ok(())
}

/// Show the cart contents and totals.
pub fn show(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let cart = load_cart(config)?;

    if cart.is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    for item in cart.items() {
        tracing::info!(
            "  {} x{}  {}  (line ${})",
            item.name,
            item.quantity,
            item.price,
            item.price.line_total(item.quantity).round_dp(2)
        );
    }
    tracing::info!("Items: {}", cart.total_count());
    tracing::info!("Total: ${}", cart.total_price());
    Ok(())
}

/// Overwrite the quantity of a cart line.
pub fn set_quantity(
    config: &StorefrontConfig,
    id: &str,
    quantity: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = load_cart(config)?;
    cart.set_quantity(&ProductId::new(id), quantity)?;
    tracing::info!("Set {id} quantity to {quantity}");
    Ok(())
}

/// Remove a cart line.
pub fn remove(config: &StorefrontConfig, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = load_cart(config)?;
    cart.remove(&ProductId::new(id))?;
    tracing::info!("Removed {id} ({} items remain)", cart.total_count());
    Ok(())
}

/// Empty the cart.
pub fn clear(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = load_cart(config)?;
    cart.clear()?;
    tracing::info!("Cart cleared");
    Ok(())
}
