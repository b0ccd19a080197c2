//! Authentication module.
//!
//! This module provides:
//! - `ApiKeyConfig`, the shared secret loaded from `API_KEY`
//! - `ApiKeyAuth` + `api_key_middleware` for protecting mutating routes
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyAuth, ApiKeyConfig, api_key_middleware};
//! use core_config::FromEnv;
//!
//! let auth = ApiKeyAuth::new(&ApiKeyConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/things", post(handler))
//!     .route_layer(axum::middleware::from_fn_with_state(auth, api_key_middleware));
//! ```

pub mod config;
pub mod middleware;

pub use config::ApiKeyConfig;
pub use middleware::{API_KEY_HEADER, ApiKeyAuth, api_key_middleware};
