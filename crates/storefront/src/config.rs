//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MERIDIAN_DATA_DIR` - Directory for local storage (default: `.meridian`)
//! - `MERIDIAN_LOG` - Tracing filter directive (e.g. `meridian_storefront=debug`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".meridian";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the file store persists into.
    pub data_dir: PathBuf,
    /// Tracing filter directive, if set.
    pub log_filter: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `MERIDIAN_DATA_DIR` is set
    /// but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match env::var("MERIDIAN_DATA_DIR") {
            Ok(dir) if dir.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "MERIDIAN_DATA_DIR".to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Ok(dir) => PathBuf::from(dir),
            Err(_) => PathBuf::from(DEFAULT_DATA_DIR),
        };

        let log_filter = env::var("MERIDIAN_LOG").ok().filter(|f| !f.is_empty());

        Ok(Self {
            data_dir,
            log_filter,
        })
    }
}
