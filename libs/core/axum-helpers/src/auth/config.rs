//! Configuration types for API key authentication.
//!
//! Implements the `FromEnv` trait from `core_config`, following the same
//! pattern as `ServerConfig`.

use core_config::{ConfigError, FromEnv, env_required};
use std::fmt;

/// API key authentication configuration.
///
/// Loaded from environment variables:
/// - `API_KEY` (required) - the shared secret callers present in `x-api-key`
///
/// # Example
///
/// ```ignore
/// use axum_helpers::ApiKeyConfig;
/// use core_config::FromEnv;
///
/// // From environment variables
/// let config = ApiKeyConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = ApiKeyConfig::new("test-key");
/// ```
#[derive(Clone)]
pub struct ApiKeyConfig {
    /// Shared secret compared byte-for-byte against the request header
    pub key: String,
}

impl ApiKeyConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("key", &"<redacted>")
            .finish()
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let key = env_required("API_KEY")?;

        if key.is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self { key })
    }
}
