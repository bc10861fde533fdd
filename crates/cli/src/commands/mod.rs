//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod session;

use meridian_storefront::config::StorefrontConfig;
use meridian_storefront::{CartStore, FileStore, StorefrontError};

/// Open the file store and load the persisted cart.
pub fn load_cart(config: &StorefrontConfig) -> Result<CartStore<FileStore>, StorefrontError> {
    let store = FileStore::open(config.data_dir.clone())?;
    Ok(CartStore::load(store)?)
}
