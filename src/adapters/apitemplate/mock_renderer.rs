//! Mock document renderer for testing.
//!
//! Returns a scripted outcome and records every payload it receives.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use crate::domain::export::{ExportedDocument, TripTemplatePayload};
use crate::ports::{TemplateError, TripDocumentRenderer};

/// Configurable mock renderer.
#[derive(Debug, Clone)]
pub struct MockTripDocumentRenderer {
    outcome: Result<Value, TemplateError>,
    calls: Arc<Mutex<Vec<TripTemplatePayload>>>,
}

impl MockTripDocumentRenderer {
    /// Succeeds with the given response body.
    pub fn returning(response: Value) -> Self {
        Self {
            outcome: Ok(response),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Succeeds with a typical apitemplate.io answer.
    pub fn success(download_url: &str) -> Self {
        Self::returning(json!({
            "status": "success",
            "download_url": download_url,
            "transaction_ref": "mock-ref",
        }))
    }

    /// Fails every call with the given error.
    pub fn failing(error: TemplateError) -> Self {
        Self {
            outcome: Err(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Payloads received so far.
    pub fn calls(&self) -> Vec<TripTemplatePayload> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl TripDocumentRenderer for MockTripDocumentRenderer {
    async fn render(
        &self,
        payload: &TripTemplatePayload,
    ) -> Result<ExportedDocument, TemplateError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(payload.clone());
        }
        self.outcome.clone().map(ExportedDocument::from_response)
    }
}
