//! Storefront domain models.

mod line_item;

pub use line_item::{LineItem, Product};
