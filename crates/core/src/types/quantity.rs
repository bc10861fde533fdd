//! Positive cart quantity type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantities must be at least 1.
    #[error("quantity must be a positive integer")]
    NotPositive,
}

/// A cart line quantity, always >= 1.
///
/// A line item with zero units does not exist - removal is a separate
/// operation - so the zero state is unrepresentable here. Deserialization
/// goes through the same check, which keeps hand-edited or corrupted
/// persisted carts from smuggling in a zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// One unit, the quantity of a freshly added line item.
    pub const ONE: Self = Self(1);

    /// Create a quantity from a raw count.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NotPositive`] if `count` is zero.
    pub const fn new(count: u32) -> Result<Self, QuantityError> {
        if count == 0 {
            Err(QuantityError::NotPositive)
        } else {
            Ok(Self(count))
        }
    }

    /// The raw count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// This quantity plus one unit, saturating at `u32::MAX`.
    #[must_use]
    pub const fn incremented(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
