//! Checkout flow: summary, payment submission, receipt.
//!
//! Checkout mirrors the page flow it replaces: reaching the summary
//! requires a signed-in session and a non-empty cart; submitting payment
//! validates the form fields and, on acceptance, clears the cart. A
//! declined payment leaves the cart untouched so the user can retry.

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::cart::{CartError, CartStore};
use crate::models::LineItem;
use crate::payment::{PaymentError, PaymentFields};
use crate::session;
use crate::storage::{LocalStore, StorageError};

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires a signed-in session.
    #[error("sign in before checking out")]
    NotSignedIn,

    /// There is nothing to check out.
    #[error("cart is empty")]
    EmptyCart,

    /// One or more payment fields failed validation.
    #[error("payment declined")]
    PaymentDeclined(Vec<PaymentError>),

    /// A cart operation failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Local storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One summary row: a line item and its price × quantity total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// The cart line item.
    pub item: LineItem,
    /// Price × quantity for this line.
    pub line_total: Decimal,
}

/// The checkout summary: every cart line with its total, plus the grand
/// total, rounded to 2 fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    /// Summary rows in cart order.
    pub lines: Vec<SummaryLine>,
    /// Grand total across all lines.
    pub total: Decimal,
}

impl CheckoutSummary {
    /// Build a summary from the current cart contents.
    #[must_use]
    pub fn from_cart<S: LocalStore>(cart: &CartStore<S>) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| SummaryLine {
                item: item.clone(),
                line_total: item.price.line_total(item.quantity),
            })
            .collect();
        Self {
            lines,
            total: cart.total_price(),
        }
    }
}

/// Proof of a completed (simulated) payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Amount charged.
    pub total: Decimal,
    /// When the payment was accepted.
    pub paid_at: NaiveDateTime,
}

/// Start checkout: gate on the sign-in flag and a non-empty cart, then
/// return the summary.
///
/// # Errors
///
/// Returns [`CheckoutError::NotSignedIn`] if the session is not signed in
/// and [`CheckoutError::EmptyCart`] if there is nothing to buy.
pub fn begin<S: LocalStore>(cart: &CartStore<S>) -> Result<CheckoutSummary, CheckoutError> {
    if !session::is_signed_in(cart.store())? {
        return Err(CheckoutError::NotSignedIn);
    }
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    Ok(CheckoutSummary::from_cart(cart))
}

/// Submit payment against the local clock.
///
/// # Errors
///
/// See [`submit_payment_at`].
pub fn submit_payment<S: LocalStore>(
    cart: &mut CartStore<S>,
    fields: &PaymentFields,
) -> Result<Receipt, CheckoutError> {
    submit_payment_at(cart, fields, Local::now().naive_local())
}

/// Submit payment, treating `now` as the current moment.
///
/// On acceptance the cart is cleared (and the empty cart persisted) and a
/// [`Receipt`] for the pre-clear total is returned.
///
/// # Errors
///
/// Returns [`CheckoutError::PaymentDeclined`] with every field failure if
/// validation does not pass; the cart is left untouched. Returns
/// [`CheckoutError::Cart`] if clearing the cart cannot be persisted.
pub fn submit_payment_at<S: LocalStore>(
    cart: &mut CartStore<S>,
    fields: &PaymentFields,
    now: NaiveDateTime,
) -> Result<Receipt, CheckoutError> {
    let errors = fields.validate_at(now);
    if !errors.is_empty() {
        return Err(CheckoutError::PaymentDeclined(errors));
    }

    let total = cart.total_price();
    cart.clear()?;

    Ok(Receipt {
        total,
        paid_at: now,
    })
}
