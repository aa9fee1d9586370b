//! Trip Document Renderer Port - external template service interface.
//!
//! The export pipeline hands a fully built payload to this port, which
//! performs exactly one call to the document-generation service.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::export::{ExportedDocument, TripTemplatePayload};
use crate::domain::trip::TripError;

/// Port for rendering a trip into a document via a template service.
///
/// # Contract
///
/// Implementations must:
/// - Issue a single request per call (no retry, no caching)
/// - Report encoding, dispatch, status and decoding failures separately
#[async_trait]
pub trait TripDocumentRenderer: Send + Sync {
    /// Render the payload and return the service's decoded answer.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError` describing which step failed.
    async fn render(&self, payload: &TripTemplatePayload)
        -> Result<ExportedDocument, TemplateError>;
}

/// Failures of a render call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Failed to encode payload: {0}")]
    Serialization(String),

    #[error("Request could not be sent: {0}")]
    Transport(String),

    #[error("Service responded with status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Response body could not be decoded: {0}")]
    Decode(String),
}

impl From<TemplateError> for TripError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::Serialization(msg) => TripError::Serialization(msg),
            TemplateError::Transport(msg) => TripError::Transport(msg),
            TemplateError::Upstream { status, body } => TripError::Upstream { status, body },
            TemplateError::Decode(msg) => TripError::Decode(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_document_renderer_is_object_safe() {
        fn _accepts_dyn(_renderer: &dyn TripDocumentRenderer) {}
    }

    #[test]
    fn upstream_failure_keeps_status_and_body() {
        let err: TripError = TemplateError::Upstream {
            status: 422,
            body: "{\"error\":\"bad template\"}".to_string(),
        }
        .into();
        assert_eq!(
            err,
            TripError::Upstream {
                status: 422,
                body: "{\"error\":\"bad template\"}".to_string(),
            }
        );
    }

    #[test]
    fn each_failure_maps_to_its_own_trip_error() {
        assert!(matches!(
            TripError::from(TemplateError::Serialization("x".into())),
            TripError::Serialization(_)
        ));
        assert!(matches!(
            TripError::from(TemplateError::Transport("x".into())),
            TripError::Transport(_)
        ));
        assert!(matches!(
            TripError::from(TemplateError::Decode("x".into())),
            TripError::Decode(_)
        ));
    }
}
