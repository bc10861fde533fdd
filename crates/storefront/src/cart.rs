//! The cart store.
//!
//! Owns the ordered list of cart line items and their persistence. The
//! cart is rehydrated from local storage at construction and written back
//! after every mutation, so callers never deal with load/save ordering.
//!
//! Invalid mutations (non-positive quantity, unknown product id) return an
//! explicit [`CartError`] and leave both the in-memory cart and the
//! persisted state unchanged.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use meridian_core::{ProductId, Quantity};

use crate::models::{LineItem, Product};
use crate::storage::{LocalStore, StorageError, keys};

/// Errors that can occur mutating the cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity is not a positive integer.
    #[error("quantity must be a positive integer")]
    InvalidQuantity,

    /// No cart line exists for the given product id.
    #[error("no cart line for product {0}")]
    UnknownProduct(ProductId),

    /// Persisting the cart failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The cart: an insertion-ordered list of line items keyed by product id,
/// persisted to a [`LocalStore`] under the `cart` key.
pub struct CartStore<S> {
    store: S,
    items: Vec<LineItem>,
}

impl<S: LocalStore> CartStore<S> {
    /// Load the cart from `store`.
    ///
    /// An absent `cart` key yields an empty cart. So does malformed JSON:
    /// corrupt persisted state is logged and discarded rather than
    /// surfaced, matching the recovery policy of the storage format.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] only if the store itself cannot be read.
    pub fn load(store: S) -> Result<Self, StorageError> {
        let items = match store.get(keys::CART)? {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "discarding malformed persisted cart");
                Vec::new()
            }),
        };
        Ok(Self { store, items })
    }

    /// Add one unit of `product` to the cart.
    ///
    /// If a line item with the same id already exists its quantity is
    /// incremented by 1; otherwise a new line with quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the updated cart cannot be
    /// persisted.
    pub fn add(&mut self, product: Product) -> Result<(), CartError> {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => existing.quantity = existing.quantity.incremented(),
            None => self.items.push(LineItem::from(product)),
        }
        self.persist()
    }

    /// Overwrite the quantity of the line item with id `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is not a
    /// positive integer that fits a `u32`, or [`CartError::UnknownProduct`]
    /// if no line item has the given id. In both cases the stored quantity
    /// is unchanged.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), CartError> {
        let quantity = u32::try_from(quantity)
            .ok()
            .and_then(|q| Quantity::new(q).ok())
            .ok_or(CartError::InvalidQuantity)?;

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == *id)
            .ok_or_else(|| CartError::UnknownProduct(id.clone()))?;

        item.quantity = quantity;
        self.persist()
    }

    /// Remove the line item with id `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] if no line item has the given
    /// id; the cart is unchanged.
    pub fn remove(&mut self, id: &ProductId) -> Result<(), CartError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        if self.items.len() == before {
            return Err(CartError::UnknownProduct(id.clone()));
        }
        self.persist()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the empty cart cannot be
    /// persisted.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.items.clear();
        self.persist()
    }

    /// Total number of units across all line items; the badge count.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Σ(price × quantity) across all line items, rounded to 2 fractional
    /// digits for display.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price.line_total(item.quantity))
            .sum::<Decimal>()
            .round_dp(2)
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The underlying local store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying local store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn persist(&mut self) -> Result<(), CartError> {
        let raw = serde_json::to_string(&self.items).map_err(StorageError::Encode)?;
        self.store.set(keys::CART, &raw)?;
        Ok(())
    }
}
