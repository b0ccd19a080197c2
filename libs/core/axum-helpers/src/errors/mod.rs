pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every failed request gets exactly one body of this shape:
/// - `code`: integer error code for logging/monitoring (e.g., 1001)
/// - `error`: error kind (e.g., "ValidationError")
/// - `message`: human-readable message
/// - `fields`: offending payload fields, only for `ValidationError`
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1001,
///   "error": "ValidationError",
///   "message": "Validation failed for fields: name, price",
///   "fields": ["name", "price"]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Error kind for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Payload fields that failed validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Application error type that can be converted to HTTP responses.
///
/// `into_response` is the only place an error becomes a response, so every
/// failing request is translated exactly once.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        fields: Vec<String>,
    },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Build a validation error from a list of offending fields.
    pub fn validation_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (message, fields) = field_list(fields);
        AppError::Validation { message, fields }
    }

    /// Error kind this error is reported as.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::InvalidQuery(_) => ErrorCode::InvalidQuery,
            AppError::Unauthorized(_) => ErrorCode::AuthenticationError,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::Internal,
        }
    }
}

/// Sorted, deduplicated field names and the validation message naming them.
///
/// Shared by every error type that reports offending payload fields.
pub fn field_list<I, S>(fields: I) -> (String, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut fields: Vec<String> = fields.into_iter().map(Into::into).collect();
    fields.sort();
    fields.dedup();

    (
        format!("Validation failed for fields: {}", fields.join(", ")),
        fields,
    )
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::validation_fields(errors.field_errors().keys().map(|field| field.to_string()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation {
            message: rejection.body_text(),
            fields: Vec::new(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.error_code();

        let (message, fields) = match self {
            AppError::Validation { message, fields } => {
                tracing::info!(
                    error_code = code.code(),
                    ?fields,
                    "Validation error: {}",
                    message
                );
                (message, Some(fields))
            }
            AppError::InvalidQuery(msg) => {
                tracing::info!(error_code = code.code(), "Invalid query: {}", msg);
                (msg, None)
            }
            AppError::Unauthorized(msg) => {
                tracing::info!(error_code = code.code(), "Unauthorized: {}", msg);
                (msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                (msg, None)
            }
            AppError::InternalServerError(msg) => {
                // Internal details stay in the logs.
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                (code.default_message().to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            fields,
        });

        (code.status(), body).into_response()
    }
}

/// Helper function to create error responses outside of `AppError`.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
///
/// let response = error_response(ErrorCode::NotFound, "No such route".to_string());
/// ```
pub fn error_response(error_code: ErrorCode, message: String) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        fields: None,
    });

    (error_code.status(), body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    async fn into_parts(err: AppError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_lists_sorted_fields() {
        let (status, body) =
            into_parts(AppError::validation_fields(["price", "name", "price"])).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "ValidationError");
        assert_eq!(body.code, 1001);
        assert_eq!(
            body.fields,
            Some(vec!["name".to_string(), "price".to_string()])
        );
        assert!(body.message.contains("name, price"));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication_error() {
        let (status, body) =
            into_parts(AppError::Unauthorized("Invalid or missing API key".into())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "AuthenticationError");
        assert_eq!(body.message, "Invalid or missing API key");
        assert!(body.fields.is_none());
    }

    #[tokio::test]
    async fn test_not_found_and_invalid_query() {
        let (status, body) = into_parts(AppError::NotFound("Product not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "NotFound");

        let (status, body) = into_parts(AppError::InvalidQuery("bad page".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "InvalidQuery");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let (status, body) =
            into_parts(AppError::InternalServerError("lock poisoned at 0x1234".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal");
        assert!(!body.message.contains("0x1234"));
    }

    #[test]
    fn test_field_list_message_names_every_field() {
        let (message, fields) = field_list(["category", "name", "category"]);
        assert_eq!(fields, vec!["category", "name"]);
        assert_eq!(message, "Validation failed for fields: category, name");
    }

    #[tokio::test]
    async fn test_json_rejection_keeps_rejection_text() {
        use axum::extract::FromRequest;

        let request = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let rejection = axum::Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();

        let (status, body) = into_parts(AppError::from(rejection)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "ValidationError");
        assert_eq!(body.fields, Some(Vec::new()));
        assert!(!body.message.is_empty());
    }
}
