//! Type-safe error codes for API responses.
//!
//! This module is the single source of truth for the error kinds the API can
//! report. Each kind carries:
//! - the kind name clients match on (e.g., "ValidationError")
//! - an integer code for logging and monitoring (e.g., 1001)
//! - the HTTP status it maps to
//! - a default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum::http::StatusCode;
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "ValidationError");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.status(), StatusCode::BAD_REQUEST);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Error kinds reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request payload failed the schema check
    ValidationError,

    /// Malformed query parameters (page, limit)
    InvalidQuery,

    /// Requested resource was not found
    NotFound,

    /// Credential is missing or does not match
    AuthenticationError,

    /// Route exists but not for this HTTP method
    MethodNotAllowed,

    // Server errors
    /// Any unanticipated failure
    Internal,
}

impl ErrorCode {
    /// Kind name for client consumption.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "ValidationError",
            Self::InvalidQuery => "InvalidQuery",
            Self::NotFound => "NotFound",
            Self::AuthenticationError => "AuthenticationError",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::Internal => "Internal",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// 1000-1999 are client errors; 5000-5999 are server errors.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidQuery => 1002,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1005,
            Self::AuthenticationError => 1006,
            Self::Internal => 5000,
        }
    }

    /// HTTP status code the kind is translated to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationError | Self::InvalidQuery => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AuthenticationError => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Default user-facing message.
    ///
    /// Handlers usually override this with something more specific.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidQuery => "Invalid query parameters",
            Self::NotFound => "Requested resource was not found",
            Self::AuthenticationError => "Invalid or missing API key",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::Internal => "An unexpected error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
