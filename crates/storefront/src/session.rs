//! The local sign-in flag.
//!
//! Authentication here is a boolean in local storage, nothing more: the
//! `signedIn` key holding the string `"true"` means the session is signed
//! in. Any other value, or no value at all, reads as signed out.

use crate::storage::{LocalStore, StorageError, keys};

/// Whether the session is signed in.
///
/// # Errors
///
/// Returns [`StorageError`] if the store cannot be read.
pub fn is_signed_in<S: LocalStore>(store: &S) -> Result<bool, StorageError> {
    Ok(store.get(keys::SIGNED_IN)?.as_deref() == Some("true"))
}

/// Mark the session as signed in.
///
/// # Errors
///
/// Returns [`StorageError`] if the flag cannot be written.
pub fn sign_in<S: LocalStore>(store: &mut S) -> Result<(), StorageError> {
    store.set(keys::SIGNED_IN, "true")
}

/// Mark the session as signed out.
///
/// # Errors
///
/// Returns [`StorageError`] if the flag cannot be removed.
pub fn sign_out<S: LocalStore>(store: &mut S) -> Result<(), StorageError> {
    store.remove(keys::SIGNED_IN)
}
