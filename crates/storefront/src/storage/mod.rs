//! Local key-value storage.
//!
//! The storefront persists everything - the cart and the sign-in flag -
//! as strings under well-known keys, the way a browser page would use
//! local storage. [`FileStore`] is the on-disk implementation the CLI
//! uses; [`MemoryStore`] backs tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage keys for storefront state.
pub mod keys {
    /// Key for the JSON-encoded cart line items.
    pub const CART: &str = "cart";

    /// Key for the sign-in flag; the string `"true"` means signed in.
    pub const SIGNED_IN: &str = "signedIn";
}

/// Errors that can occur reading or writing local storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// State could not be encoded for persistence.
    #[error("storage encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A synchronous string key-value store.
///
/// Mirrors the shape of browser local storage: `get`/`set`/`remove` on
/// string keys, no transactions, no expiry.
pub trait LocalStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
