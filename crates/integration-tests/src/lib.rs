//! Integration tests for Meridian.
//!
//! The tests live in `tests/` and exercise the storefront library through
//! the on-disk [`meridian_storefront::FileStore`], the same path the CLI
//! takes.

#![cfg_attr(not(test), forbid(unsafe_code))]
