//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are single-currency (USD display) per product policy; multi-currency
//! support is out of scope. Amounts use [`rust_decimal::Decimal`] so that
//! totals never accumulate binary floating-point error.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Quantity;

/// A unit price in the currency's standard unit (dollars, not cents).
///
/// The cart trusts the catalog to supply well-formed prices; negative or
/// otherwise nonsensical amounts are not rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The raw decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The line total for this price at the given quantity.
    #[must_use]
    pub fn line_total(&self, quantity: Quantity) -> Decimal {
        self.0 * Decimal::from(quantity.get())
    }
}

impl fmt::Display for Price {
    /// Format for display (e.g. `$19.99`), rounded to 2 fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0.round_dp(2))
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rounds_to_cents() {
        let price: Price = "2495.99".parse().unwrap();
        assert_eq!(price.to_string(), "$2495.99");

        let price: Price = "10".parse().unwrap();
        assert_eq!(price.to_string(), "$10.00");
    }

    #[test]
    fn test_line_total() {
        let price: Price = "5.50".parse().unwrap();
        let qty = Quantity::new(3).unwrap();
        assert_eq!(price.line_total(qty), Decimal::from_str("16.50").unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-price".parse::<Price>().is_err());
    }
}
