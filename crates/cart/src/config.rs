//! Cart slot configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SMILEBRUSH_CART_PATH` - Path of the persisted cart slot file
//!   (default: `smilebrush_cart.json` in the working directory)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::store::JsonFileStore;

/// Default slot file name when `SMILEBRUSH_CART_PATH` is unset.
pub const DEFAULT_SLOT_FILE: &str = "smilebrush_cart.json";

const CART_PATH_VAR: &str = "SMILEBRUSH_CART_PATH";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart storage configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the persisted cart slot file.
    pub slot_path: PathBuf,
}

impl CartConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when `SMILEBRUSH_CART_PATH` is
    /// set but empty or not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(CART_PATH_VAR) {
            Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
                CART_PATH_VAR.to_owned(),
                "must not be empty".to_owned(),
            )),
            Ok(value) => Ok(Self {
                slot_path: PathBuf::from(value),
            }),
            Err(env::VarError::NotPresent) => Ok(Self {
                slot_path: PathBuf::from(DEFAULT_SLOT_FILE),
            }),
            Err(e) => Err(ConfigError::InvalidEnvVar(
                CART_PATH_VAR.to_owned(),
                e.to_string(),
            )),
        }
    }

    /// The file-backed slot this configuration points at.
    #[must_use]
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.slot_path)
    }
}
