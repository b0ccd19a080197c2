use axum::response::Response;
use std::any::Any;

use super::{ErrorCode, error_response};

/// Handler for unknown routes.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    error_response(
        ErrorCode::NotFound,
        "The requested resource was not found".to_string(),
    )
}

/// Handler for a known route called with an unsupported method.
pub async fn method_not_allowed() -> Response {
    error_response(
        ErrorCode::MethodNotAllowed,
        ErrorCode::MethodNotAllowed.default_message().to_string(),
    )
}

/// Converts a handler panic into an `Internal` error response.
///
/// Plugs into `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(
        error_code = ErrorCode::Internal.code(),
        "Handler panicked: {}",
        detail
    );

    error_response(
        ErrorCode::Internal,
        ErrorCode::Internal.default_message().to_string(),
    )
}
