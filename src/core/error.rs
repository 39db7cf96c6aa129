//! Typed error handling for the query engine
//!
//! Callers receive either a complete result or a single structured failure.
//! There are exactly two leaf categories with wire consequences:
//!
//! - [`FilterError`]: a submitted filter or suggestion field is outside its
//!   legal value domain → rejected with 400, never silently ignored.
//! - [`StoreError`]: the record store round-trip failed → propagated as one
//!   fatal 503 per request, no partial results.
//!
//! Unparseable timestamps are deliberately NOT an error: they degrade to
//! the sentinel instant inside the date normalizer and never surface here.
//!
//! # Example
//!
//! ```rust,ignore
//! match engine.suggest(kind, "shoe_size").await {
//!     Err(EngineError::Filter(FilterError::UnsupportedSuggestField { field })) => {
//!         eprintln!("no suggestions for {}", field);
//!     }
//!     other => println!("{:?}", other),
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The top-level error type for engine operations.
#[derive(Debug)]
pub enum EngineError {
    /// Filter or suggestion validation failures
    Filter(FilterError),

    /// Record store failures
    Store(StoreError),

    /// Request addressed a record kind that does not exist
    UnknownKind { kind: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Filter(e) => write!(f, "{}", e),
            EngineError::Store(e) => write!(f, "{}", e),
            EngineError::UnknownKind { kind } => write!(f, "Unknown record kind: {}", kind),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Filter(e) => Some(e),
            EngineError::Store(e) => Some(e),
            EngineError::UnknownKind { .. } => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl EngineError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            EngineError::Filter(_) => StatusCode::BAD_REQUEST,
            EngineError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            EngineError::UnknownKind { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::Filter(e) => e.error_code(),
            EngineError::Store(_) => "STORE_UNAVAILABLE",
            EngineError::UnknownKind { .. } => "UNKNOWN_RECORD_KIND",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            EngineError::Filter(FilterError::InvalidValue { field, value, .. }) => {
                Some(serde_json::json!({
                    "field": field,
                    "value": value
                }))
            }
            EngineError::Filter(FilterError::UnsupportedSuggestField { field }) => {
                Some(serde_json::json!({
                    "field": field,
                    "supported": crate::core::engine::SUGGEST_FIELDS
                }))
            }
            EngineError::UnknownKind { kind } => Some(serde_json::json!({
                "kind": kind,
                "supported": ["needs", "providers"]
            })),
            _ => None,
        }
    }
}

impl IntoResponse for EngineError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Filter Errors
// =============================================================================

/// Validation failures on filter and suggestion parameters.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A recognized filter key carried a value outside its legal domain
    #[error("Invalid value '{value}' for filter '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// A suggestions lookup named a field outside the allow-list
    #[error("Unsupported suggestion field '{field}'")]
    UnsupportedSuggestField { field: String },
}

impl FilterError {
    pub fn error_code(&self) -> &'static str {
        match self {
            FilterError::InvalidValue { .. } => "INVALID_FILTER_VALUE",
            FilterError::UnsupportedSuggestField { .. } => "UNSUPPORTED_SUGGEST_FIELD",
        }
    }
}

impl From<FilterError> for EngineError {
    fn from(err: FilterError) -> Self {
        EngineError::Filter(err)
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Record store round-trip failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or locked
    #[error("Record store unavailable: {message}")]
    Unavailable { message: String },

    /// A scan operation failed mid-flight
    #[error("Record scan failed: {message}")]
    Scan { message: String },

    /// A count operation failed mid-flight
    #[error("Record count failed: {message}")]
    Count { message: String },
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        EngineError::Store(err)
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_error_display() {
        let err = FilterError::InvalidValue {
            field: "priority".to_string(),
            value: "9".to_string(),
            message: "must be between 1 and 5".to_string(),
        };
        assert!(err.to_string().contains("priority"));
        assert!(err.to_string().contains("9"));
    }

    #[test]
    fn test_filter_error_maps_to_bad_request() {
        let err: EngineError = FilterError::UnsupportedSuggestField {
            field: "phone".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "UNSUPPORTED_SUGGEST_FIELD");
    }

    #[test]
    fn test_store_error_maps_to_service_unavailable() {
        let err: EngineError = StoreError::Unavailable {
            message: "lock poisoned".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_code(), "STORE_UNAVAILABLE");
        assert!(err.to_string().contains("lock poisoned"));
    }

    #[test]
    fn test_unknown_kind_maps_to_not_found() {
        let err = EngineError::UnknownKind {
            kind: "warehouses".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "UNKNOWN_RECORD_KIND");
    }

    #[test]
    fn test_suggest_error_response_lists_supported_fields() {
        let err: EngineError = FilterError::UnsupportedSuggestField {
            field: "phone".to_string(),
        }
        .into();
        let response = err.to_response();
        assert_eq!(response.code, "UNSUPPORTED_SUGGEST_FIELD");
        let details = response.details.expect("details should be present");
        assert_eq!(details["supported"], serde_json::json!(["district", "status", "tag"]));
    }

    #[test]
    fn test_error_response_serialization_skips_empty_details() {
        let err: EngineError = StoreError::Scan {
            message: "boom".to_string(),
        }
        .into();
        let body = serde_json::to_value(err.to_response()).unwrap();
        assert_eq!(body["code"], "STORE_UNAVAILABLE");
        assert!(body.get("details").is_none());
    }
}
