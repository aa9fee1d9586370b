//! GetTripHandler - Query handler for retrieving one resolved trip.

use std::sync::Arc;

use crate::domain::foundation::TripId;
use crate::domain::trip::{Trip, TripError};
use crate::ports::TripReader;

/// Query to get a trip by ID.
#[derive(Debug, Clone)]
pub struct GetTripQuery {
    pub trip_id: TripId,
}

/// Handler for retrieving trip details.
pub struct GetTripHandler {
    reader: Arc<dyn TripReader>,
}

impl GetTripHandler {
    pub fn new(reader: Arc<dyn TripReader>) -> Self {
        Self { reader }
    }

    #[tracing::instrument(skip(self, query), fields(trip_id = %query.trip_id))]
    pub async fn handle(&self, query: GetTripQuery) -> Result<Trip, TripError> {
        self.reader
            .find_by_id(&query.trip_id)
            .await?
            .ok_or(TripError::NotFound(query.trip_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTripStore;
    use crate::domain::trip::TripFields;
    use crate::ports::TripRepository;

    #[tokio::test]
    async fn returns_trip_with_resolved_references() {
        let store = Arc::new(InMemoryTripStore::new());
        let condition = store.add_condition("Adventurous").await;
        let accommodation = store.add_accommodation("Riverside Inn").await;
        let created = store
            .create(
                &TripFields::new("Tour", "x", 2, Some(condition), Some(accommodation)).unwrap(),
            )
            .await
            .unwrap();

        let handler = GetTripHandler::new(store);
        let trip = handler
            .handle(GetTripQuery {
                trip_id: created.id(),
            })
            .await
            .unwrap();

        assert_eq!(trip.condition().map(|c| c.style.as_str()), Some("Adventurous"));
        assert_eq!(
            trip.accommodation().map(|a| a.name.as_str()),
            Some("Riverside Inn")
        );
    }

    #[tokio::test]
    async fn unknown_trip_is_not_found() {
        let handler = GetTripHandler::new(Arc::new(InMemoryTripStore::new()));
        let err = handler
            .handle(GetTripQuery {
                trip_id: TripId::new(5),
            })
            .await
            .unwrap_err();
        assert_eq!(err, TripError::NotFound(TripId::new(5)));
    }
}
