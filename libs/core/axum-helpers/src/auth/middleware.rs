use super::config::ApiKeyConfig;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Header carrying the caller's API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared-secret checker for mutating routes.
///
/// Cheap to clone; the key is shared behind an `Arc`.
#[derive(Clone)]
pub struct ApiKeyAuth {
    key: Arc<[u8]>,
}

impl ApiKeyAuth {
    pub fn new(config: &ApiKeyConfig) -> Self {
        Self {
            key: Arc::from(config.key.as_bytes()),
        }
    }

    /// Checks the `x-api-key` header byte-for-byte against the configured key.
    pub fn verify(&self, headers: &HeaderMap) -> Result<(), AppError> {
        match headers.get(API_KEY_HEADER) {
            Some(presented) if presented.as_bytes() == &*self.key => Ok(()),
            Some(_) => {
                tracing::debug!("API key mismatch");
                Err(AppError::Unauthorized("Invalid or missing API key".to_string()))
            }
            None => {
                tracing::debug!("No API key found in {} header", API_KEY_HEADER);
                Err(AppError::Unauthorized("Invalid or missing API key".to_string()))
            }
        }
    }
}

/// API key authentication middleware
///
/// Rejects the request with `AuthenticationError` before any later stage
/// (body extraction, validation, handler) runs.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::{ApiKeyAuth, ApiKeyConfig, api_key_middleware};
///
/// let auth = ApiKeyAuth::new(&ApiKeyConfig::new("secret"));
///
/// let protected_routes = Router::new()
///     .route("/things", post(create_thing))
///     .route_layer(axum::middleware::from_fn_with_state(auth, api_key_middleware));
/// ```
pub async fn api_key_middleware(
    State(auth): State<ApiKeyAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    auth.verify(request.headers())?;
    Ok(next.run(request).await)
}
