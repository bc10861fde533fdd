//! Session flag commands.

use meridian_storefront::config::StorefrontConfig;
use meridian_storefront::{FileStore, session};

/// Mark the session as signed in.
pub fn sign_in(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = FileStore::open(config.data_dir.clone())?;
    session::sign_in(&mut store)?;
    tracing::info!("Signed in");
    Ok(())
}

/// Mark the session as signed out.
pub fn sign_out(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = FileStore::open(config.data_dir.clone())?;
    session::sign_out(&mut store)?;
    tracing::info!("Signed out");
    Ok(())
}

/// Show whether the session is signed in.
pub fn status(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(config.data_dir.clone())?;
    if session::is_signed_in(&store)? {
        tracing::info!("Signed in");
    } else {
        tracing::info!("Signed out");
    }
    Ok(())
}
