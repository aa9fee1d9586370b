//! UpdateTripHandler - Command handler for replacing a trip's fields.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, TripId};
use crate::domain::trip::{Trip, TripError, TripFields};
use crate::ports::TripRepository;

/// Command to overwrite every caller-supplied field of a trip.
///
/// Absent inbound fields have already been resolved to their zero values;
/// path segments are not part of the command.
#[derive(Debug, Clone)]
pub struct UpdateTripCommand {
    pub trip_id: TripId,
    pub fields: TripFields,
}

/// Handler for updating trips.
pub struct UpdateTripHandler {
    repository: Arc<dyn TripRepository>,
}

impl UpdateTripHandler {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, cmd), fields(trip_id = %cmd.trip_id))]
    pub async fn handle(&self, cmd: UpdateTripCommand) -> Result<Trip, TripError> {
        let trip = self
            .repository
            .update(&cmd.trip_id, &cmd.fields)
            .await
            .map_err(|e| match e.code {
                ErrorCode::TripNotFound => TripError::NotFound(cmd.trip_id),
                _ => TripError::from(e),
            })?;

        tracing::info!(trip_id = %trip.id(), "Trip updated");
        Ok(trip)
    }
}
