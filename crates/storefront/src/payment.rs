//! Payment-form field validation.
//!
//! Four raw text fields are checked independently and every failure is
//! collected, so the user sees all problems at once rather than fixing
//! them one submission at a time. Nothing here is real payment
//! processing: the card number check is a format check, not a Luhn or
//! issuer check.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate, NaiveDateTime};
use regex::Regex;
use thiserror::Error;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]{2,}$").expect("Invalid regex"));

static CARD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{16}$").expect("Invalid regex"));

static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})/(\d{2})$").expect("Invalid regex"));

static CVC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("Invalid regex"));

/// A single payment-form validation failure.
///
/// The `Display` strings are the user-facing messages; callers surface
/// them verbatim, joined by newlines.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    /// Cardholder name is not letters and spaces, length >= 2.
    #[error("Enter a valid cardholder name.")]
    InvalidName,

    /// Card number is not exactly 16 digits after stripping whitespace.
    #[error("Enter a valid 16-digit card number.")]
    InvalidCardNumber,

    /// Expiry is not in `MM/YY` form.
    #[error("Enter expiry date in MM/YY format.")]
    InvalidExpiryFormat,

    /// Expiry month is out of range or the card's expiry month has passed.
    #[error("Card expiry date is invalid or expired.")]
    ExpiredCard,

    /// CVC is not 3 or 4 digits.
    #[error("Enter a valid 3 or 4 digit CVC.")]
    InvalidCvc,
}

/// Raw payment-form input, consumed once at submission and never stored.
#[derive(Debug, Clone)]
pub struct PaymentFields {
    /// Cardholder name as typed.
    pub cardholder_name: String,
    /// Card number as typed; internal whitespace is tolerated.
    pub card_number: String,
    /// Expiry in `MM/YY`.
    pub expiry: String,
    /// Card verification code.
    pub cvc: String,
}

impl PaymentFields {
    /// Validate all four fields against the local clock.
    #[must_use]
    pub fn validate(&self) -> Vec<PaymentError> {
        self.validate_at(Local::now().naive_local())
    }

    /// Validate all four fields, treating `now` as the current moment for
    /// the expiry check.
    ///
    /// Errors are collected in field order: name, card number, expiry,
    /// CVC. An empty result means the fields are accepted.
    #[must_use]
    pub fn validate_at(&self, now: NaiveDateTime) -> Vec<PaymentError> {
        let mut errors = Vec::new();

        if !NAME_RE.is_match(self.cardholder_name.trim()) {
            errors.push(PaymentError::InvalidName);
        }

        let card: String = self.card_number.split_whitespace().collect();
        if !CARD_RE.is_match(&card) {
            errors.push(PaymentError::InvalidCardNumber);
        }

        match EXPIRY_RE.captures(self.expiry.trim()) {
            None => errors.push(PaymentError::InvalidExpiryFormat),
            Some(caps) => {
                let month: u32 = caps[1].parse().unwrap_or(0);
                let year: u32 = caps[2].parse().unwrap_or(0);
                if !is_expiry_valid(month, year, now) {
                    errors.push(PaymentError::ExpiredCard);
                }
            }
        }

        if !CVC_RE.is_match(self.cvc.trim()) {
            errors.push(PaymentError::InvalidCvc);
        }

        errors
    }
}

/// A card expiring in month `month` of year `2000 + year` is good through
/// the last instant of that month: the cutoff is the first moment of the
/// following month.
fn is_expiry_valid(month: u32, year: u32, now: NaiveDateTime) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }

    let expiry_year = 2000 + i32::try_from(year).unwrap_or(0);
    let (cutoff_year, cutoff_month) = if month == 12 {
        (expiry_year + 1, 1)
    } else {
        (expiry_year, month + 1)
    };

    NaiveDate::from_ymd_opt(cutoff_year, cutoff_month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .is_some_and(|cutoff| cutoff > now)
}
