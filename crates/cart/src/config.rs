//! Cart store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_DIR` - Directory for file-backed cart storage (default: `.marketplace`)
//! - `CART_NAMESPACE` - Key namespace for persisted cart data (default: `@Marketplace`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_STORAGE_DIR: &str = ".marketplace";
const DEFAULT_NAMESPACE: &str = "@Marketplace";

/// Suffix of the fixed storage key the cart collection is persisted under.
const CART_PRODUCTS_KEY: &str = "CartProducts";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart store configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory the file-backed storage writes into
    pub storage_dir: PathBuf,
    /// Namespace prefixed to every storage key, isolating this
    /// application's data from other users of the same storage
    pub namespace: String,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_dir =
            PathBuf::from(get_env_or_default("CART_STORAGE_DIR", DEFAULT_STORAGE_DIR));
        let namespace = get_env_or_default("CART_NAMESPACE", DEFAULT_NAMESPACE);
        if namespace.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CART_NAMESPACE".to_owned(),
                "must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            storage_dir,
            namespace,
        })
    }

    /// The fixed key the serialized cart collection is stored under.
    ///
    /// The `{namespace}:CartProducts` shape matches previously persisted
    /// carts; changing it would orphan existing data.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("{}:{CART_PRODUCTS_KEY}", self.namespace)
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            namespace: DEFAULT_NAMESPACE.to_owned(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
