//! Trip-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, TripId, ValidationError};

/// Errors surfaced by trip operations.
///
/// Every variant is mapped to exactly one HTTP response at the adapter
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripError {
    /// Inbound input was malformed.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Trip not found: {0}")]
    NotFound(TripId),

    /// Persistence read or write failed.
    #[error("{0}")]
    Store(String),

    /// The export payload could not be encoded.
    #[error("Failed to encode export payload: {0}")]
    Serialization(String),

    /// The template service could not be reached.
    #[error("Failed to reach template service: {0}")]
    Transport(String),

    /// The template service answered with a non-success status.
    #[error("Template service responded with status {status}")]
    Upstream { status: u16, body: String },

    /// The template service answered with an unreadable body.
    #[error("Failed to read template service response: {0}")]
    Decode(String),
}

impl TripError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TripError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        TripError::Store(message.into())
    }

    /// Stable code used in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            TripError::ValidationFailed { .. } => "VALIDATION_FAILED",
            TripError::NotFound(_) => "TRIP_NOT_FOUND",
            TripError::Store(_) => "STORE_ERROR",
            TripError::Serialization(_) => "SERIALIZATION_ERROR",
            TripError::Transport(_) => "TRANSPORT_ERROR",
            TripError::Upstream { .. } => "UPSTREAM_ERROR",
            TripError::Decode(_) => "DECODE_ERROR",
        }
    }
}

impl From<ValidationError> for TripError {
    fn from(err: ValidationError) -> Self {
        TripError::validation(err.field().to_string(), err.to_string())
    }
}

/// Lifts a port error into the trip taxonomy.
///
/// `TripNotFound` needs the id, so callers that can produce it map that case
/// themselves; here it degrades to a store error carrying the message.
impl From<DomainError> for TripError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => TripError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => TripError::Store(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_becomes_store_error_with_message() {
        let err: TripError = DomainError::database("Failed to insert trip: boom").into();
        assert_eq!(err, TripError::Store("Failed to insert trip: boom".to_string()));
    }

    #[test]
    fn delete_step_errors_keep_distinct_messages() {
        let paths: TripError =
            DomainError::new(ErrorCode::PathDeleteFailed, "Failed to delete trip paths").into();
        let trip: TripError =
            DomainError::new(ErrorCode::TripDeleteFailed, "Failed to delete trip").into();
        assert_ne!(paths.to_string(), trip.to_string());
    }

    #[test]
    fn validation_domain_error_keeps_field() {
        let err: TripError = DomainError::from(ValidationError::empty_field("name")).into();
        match err {
            TripError::ValidationFailed { field, .. } => assert_eq!(field, "name"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn upstream_error_display_includes_status() {
        let err = TripError::Upstream {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Template service responded with status 401");
        assert_eq!(err.code(), "UPSTREAM_ERROR");
    }
}
