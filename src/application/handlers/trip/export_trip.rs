//! ExportTripHandler - Renders a trip through the document template service.
//!
//! Load the aggregate, build the sanitized payload, call the renderer once.
//! Nothing is persisted.

use std::sync::Arc;

use crate::domain::export::{ExportedDocument, TripTemplatePayload};
use crate::domain::foundation::TripId;
use crate::domain::trip::TripError;
use crate::ports::{TripDocumentRenderer, TripReader};

/// Query to export a trip.
#[derive(Debug, Clone)]
pub struct ExportTripQuery {
    pub trip_id: TripId,
}

/// Handler for exporting trips.
pub struct ExportTripHandler {
    reader: Arc<dyn TripReader>,
    renderer: Arc<dyn TripDocumentRenderer>,
}

impl ExportTripHandler {
    pub fn new(reader: Arc<dyn TripReader>, renderer: Arc<dyn TripDocumentRenderer>) -> Self {
        Self { reader, renderer }
    }

    #[tracing::instrument(skip(self, query), fields(trip_id = %query.trip_id))]
    pub async fn handle(&self, query: ExportTripQuery) -> Result<ExportedDocument, TripError> {
        let trip = self
            .reader
            .find_by_id(&query.trip_id)
            .await?
            .ok_or(TripError::NotFound(query.trip_id))?;

        let payload = TripTemplatePayload::from_trip(&trip);
        let document = self.renderer.render(&payload).await.map_err(|e| {
            tracing::warn!(trip_id = %query.trip_id, error = %e, "Trip export failed");
            TripError::from(e)
        })?;

        tracing::info!(
            trip_id = %query.trip_id,
            download_url = document.download_url.as_deref().unwrap_or(""),
            "Trip exported"
        );
        Ok(document)
    }
}
