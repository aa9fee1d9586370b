//! DeleteTripHandler - Command handler for removing a trip and its paths.

use std::sync::Arc;

use crate::domain::foundation::TripId;
use crate::domain::trip::TripError;
use crate::ports::TripRepository;

/// Command to delete a trip.
#[derive(Debug, Clone)]
pub struct DeleteTripCommand {
    pub trip_id: TripId,
}

/// Handler for deleting trips.
///
/// Deleting an id that has no trip succeeds.
pub struct DeleteTripHandler {
    repository: Arc<dyn TripRepository>,
}

impl DeleteTripHandler {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, cmd), fields(trip_id = %cmd.trip_id))]
    pub async fn handle(&self, cmd: DeleteTripCommand) -> Result<(), TripError> {
        self.repository.delete(&cmd.trip_id).await?;
        tracing::info!(trip_id = %cmd.trip_id, "Trip deleted");
        Ok(())
    }
}
