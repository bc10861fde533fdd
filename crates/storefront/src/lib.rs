//! Meridian Storefront library.
//!
//! The client-side logic core of the Meridian storefront: a locally
//! persisted shopping cart, a sign-in flag, and a checkout flow with
//! payment-form validation. There is no server and no real payment
//! processing - everything lives in local key-value storage.
//!
//! # Modules
//!
//! - [`storage`] - Key-value persistence ([`storage::FileStore`] on disk,
//!   [`storage::MemoryStore`] for tests)
//! - [`cart`] - The cart store: line items, mutations, derived totals
//! - [`payment`] - Payment-form field validation
//! - [`session`] - The local sign-in flag
//! - [`checkout`] - Checkout summary and payment submission
//! - [`config`] - Environment configuration
//! - [`error`] - Unified error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod payment;
pub mod session;
pub mod storage;

pub use cart::{CartError, CartStore};
pub use checkout::{CheckoutError, CheckoutSummary, Receipt, SummaryLine};
pub use error::{Result, StorefrontError};
pub use models::{LineItem, Product};
pub use payment::{PaymentError, PaymentFields};
pub use storage::{FileStore, LocalStore, MemoryStore, StorageError};
