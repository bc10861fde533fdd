//! Meridian Core - Shared types library.
//!
//! This crate provides common types used across all Meridian components:
//! - `storefront` - Cart, checkout, and payment-validation logic
//! - `cli` - Command-line storefront frontend
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe product IDs, prices, and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
