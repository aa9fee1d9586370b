//! CreateTripHandler - Command handler for creating new trips.

use std::sync::Arc;

use crate::domain::trip::{Trip, TripError, TripFields};
use crate::ports::TripRepository;

/// Command to create a new trip.
#[derive(Debug, Clone)]
pub struct CreateTripCommand {
    pub fields: TripFields,
}

/// Handler for creating trips.
pub struct CreateTripHandler {
    repository: Arc<dyn TripRepository>,
}

impl CreateTripHandler {
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self, cmd), fields(name = %cmd.fields.name))]
    pub async fn handle(&self, cmd: CreateTripCommand) -> Result<Trip, TripError> {
        let trip = self.repository.create(&cmd.fields).await?;
        tracing::info!(trip_id = %trip.id(), "Trip created");
        Ok(trip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTripStore;
    use crate::domain::foundation::{AccommodationId, ConditionId, DomainError, ErrorCode, TripId};
    use async_trait::async_trait;

    struct FailingTripRepository;

    #[async_trait]
    impl TripRepository for FailingTripRepository {
        async fn create(&self, _fields: &TripFields) -> Result<Trip, DomainError> {
            Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated insert failure",
            ))
        }

        async fn update(&self, _id: &TripId, _fields: &TripFields) -> Result<Trip, DomainError> {
            unreachable!()
        }

        async fn delete(&self, _id: &TripId) -> Result<(), DomainError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn creates_trip_with_store_assigned_id() {
        let store = Arc::new(InMemoryTripStore::new());
        let handler = CreateTripHandler::new(store.clone());
        let fields = TripFields::new("Bangkok Tour", "leisure", 3, None, None).unwrap();

        let trip = handler
            .handle(CreateTripCommand { fields })
            .await
            .unwrap();

        assert_eq!(trip.name(), "Bangkok Tour");
        assert_eq!(trip.days(), 3);
        assert!(trip.paths().is_empty());
        assert_eq!(store.trip_count().await, 1);
    }

    #[tokio::test]
    async fn accepts_references_that_do_not_exist() {
        let handler = CreateTripHandler::new(Arc::new(InMemoryTripStore::new()));
        let fields = TripFields::new(
            "Orphan",
            "x",
            1,
            Some(ConditionId::new(42)),
            Some(AccommodationId::new(43)),
        )
        .unwrap();

        let trip = handler
            .handle(CreateTripCommand { fields })
            .await
            .unwrap();

        assert_eq!(trip.condition_id(), Some(ConditionId::new(42)));
        assert!(trip.condition().is_none());
    }

    #[tokio::test]
    async fn store_failure_becomes_store_error() {
        let handler = CreateTripHandler::new(Arc::new(FailingTripRepository));
        let fields = TripFields::new("x", "y", 1, None, None).unwrap();

        let err = handler
            .handle(CreateTripCommand { fields })
            .await
            .unwrap_err();

        assert_eq!(err, TripError::Store("Simulated insert failure".to_string()));
    }
}
