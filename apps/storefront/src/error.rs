//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Input line ──► Command ──► Result<Response, ApiError>                  │
//! │                                  │                                      │
//! │          ┌───────────────────────┼───────────────────────┐              │
//! │          ▼                       ▼                       ▼              │
//! │  CoreError::IndexOutOfRange  ValidationError      unparseable line      │
//! │  → NOT_FOUND                 → VALIDATION_ERROR   → BAD_COMMAND         │
//! │                                + details: one message per field         │
//! │                                                                         │
//! │  Every error is written back as a JSON line; none ends the session.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use sockshop_core::CoreError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Please correct the following error(s)",
///   "details": ["Rating required."]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field messages, in display order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Selected variant does not exist
    NotFound,

    /// Review form is incomplete
    ValidationError,

    /// Cart action not available right now
    CartError,

    /// Input line could not be understood
    BadCommand,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    /// Creates a bad command error.
    pub fn bad_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::IndexOutOfRange { index, .. } => ApiError::not_found("Variant index", index),
            CoreError::UnknownVariant(id) => ApiError::not_found("Variant", id),
            CoreError::Validation(e) => ApiError {
                code: ErrorCode::ValidationError,
                message: "Please correct the following error(s)".to_string(),
                details: e.messages(),
            },
            CoreError::Catalog(e) => {
                tracing::error!("Catalog invariant broken at runtime: {}", e);
                ApiError::internal("Product data is unavailable")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use sockshop_core::{ReviewField, ValidationError};

    #[test]
    fn test_validation_error_carries_field_messages() {
        let err: ApiError = CoreError::Validation(ValidationError::Required {
            fields: vec![ReviewField::Rating],
        })
        .into();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.details, vec!["Rating required.".to_string()]);

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["details"][0], "Rating required.");
    }

    #[test]
    fn test_index_out_of_range_maps_to_not_found() {
        let err: ApiError = CoreError::IndexOutOfRange { index: 3, len: 2 }.into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Variant index not found: 3");

        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("details").is_none());
    }
}
