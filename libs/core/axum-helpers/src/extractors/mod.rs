//! Custom extractors for Axum handlers.
//!
//! Extractors here reject with `AppError`, so extraction failures render the
//! same error body as handler failures.

pub mod validated_json;

pub use validated_json::ValidatedJson;
