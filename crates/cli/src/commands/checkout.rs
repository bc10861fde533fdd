//! Checkout commands.

use meridian_storefront::checkout;
use meridian_storefront::config::StorefrontConfig;
use meridian_storefront::{CheckoutError, PaymentFields};

use super::load_cart;

/// Show the checkout summary.
pub fn summary(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let cart = load_cart(config)?;
    let summary = checkout::begin(&cart)?;

    for line in &summary.lines {
        tracing::info!(
            "  {} x{}  line ${}",
            line.item.name,
            line.item.quantity,
            line.line_total.round_dp(2)
        );
    }
    tracing::info!("Total Price: ${}", summary.total);
    Ok(())
}

/// Validate payment fields; on acceptance the cart is cleared.
pub fn pay(
    config: &StorefrontConfig,
    name: String,
    card: String,
    expiry: String,
    cvc: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = load_cart(config)?;
    // Same gate as the summary page: signed in, something to buy
    checkout::begin(&cart)?;

    let fields = PaymentFields {
        cardholder_name: name,
        card_number: card,
        expiry,
        cvc,
    };

    match checkout::submit_payment(&mut cart, &fields) {
        Ok(receipt) => {
            tracing::info!("Payment Successful! Charged ${}", receipt.total);
            tracing::info!("Thank you for your purchase.");
            Ok(())
        }
        Err(CheckoutError::PaymentDeclined(errors)) => {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            tracing::error!("Payment Error:\n{joined}");
            Err(Box::new(CheckoutError::PaymentDeclined(errors)))
        }
        Err(e) => Err(Box::new(e)),
    }
}
