//! Unified error handling.
//!
//! Provides a single `StorefrontError` for callers that do not want to
//! distinguish the component a failure came from. All failure paths here
//! are recoverable: cart state is never left half-mutated.

use thiserror::Error;

use crate::cart::CartError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Top-level error type for the storefront library.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration loading failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Local storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A cart mutation was rejected or could not be persisted.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Checkout was refused or payment declined.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
