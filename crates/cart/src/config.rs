//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_KEY` - Key the serialized cart is stored under
//!   (default: `@treadline:cart`)

use thiserror::Error;

/// Default persistence key for the serialized cart.
///
/// Kept namespaced so the cart coexists with other values in shared
/// key-value backends.
pub const DEFAULT_STORAGE_KEY: &str = "@treadline:cart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Key the serialized cart snapshot is stored under.
    storage_key: String,
}

impl CartConfig {
    /// Create a configuration with an explicit storage key.
    #[must_use]
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CART_STORAGE_KEY` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_key = get_env_or_default("CART_STORAGE_KEY", DEFAULT_STORAGE_KEY);
        if storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CART_STORAGE_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self { storage_key })
    }

    /// The key the serialized cart snapshot is stored under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_key() {
        let config = CartConfig::default();
        assert_eq!(config.storage_key(), "@treadline:cart");
    }

    #[test]
    fn test_new_takes_explicit_key() {
        let config = CartConfig::new("@treadline:cart-staging");
        assert_eq!(config.storage_key(), "@treadline:cart-staging");
    }

    // Single test covering both env paths so parallel tests never race on
    // the variable.
    #[test]
    #[allow(unsafe_code)]
    fn test_from_env_override_and_fallback() {
        unsafe { std::env::set_var("CART_STORAGE_KEY", "@treadline:cart-test") };
        let config = CartConfig::from_env().unwrap();
        assert_eq!(config.storage_key(), "@treadline:cart-test");

        unsafe { std::env::set_var("CART_STORAGE_KEY", "   ") };
        let result = CartConfig::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));

        unsafe { std::env::remove_var("CART_STORAGE_KEY") };
        let config = CartConfig::from_env().unwrap();
        assert_eq!(config.storage_key(), DEFAULT_STORAGE_KEY);
    }
}
