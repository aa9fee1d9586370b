//! ListTripsHandler - Query handler for listing every trip.

use std::sync::Arc;

use crate::domain::trip::{Trip, TripError};
use crate::ports::TripReader;

/// Handler for listing trips.
pub struct ListTripsHandler {
    reader: Arc<dyn TripReader>,
}

impl ListTripsHandler {
    pub fn new(reader: Arc<dyn TripReader>) -> Self {
        Self { reader }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self) -> Result<Vec<Trip>, TripError> {
        Ok(self.reader.list_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTripStore;
    use crate::domain::foundation::{DomainError, TripId};
    use crate::domain::trip::TripFields;
    use crate::ports::TripRepository;
    use async_trait::async_trait;

    struct FailingTripReader;

    #[async_trait]
    impl TripReader for FailingTripReader {
        async fn find_by_id(&self, _id: &TripId) -> Result<Option<Trip>, DomainError> {
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<Trip>, DomainError> {
            Err(DomainError::database("Failed to fetch trips: connection reset"))
        }
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListTripsHandler::new(Arc::new(InMemoryTripStore::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_every_trip_in_id_order() {
        let store = Arc::new(InMemoryTripStore::new());
        for name in ["first", "second", "third"] {
            store
                .create(&TripFields::new(name, "x", 1, None, None).unwrap())
                .await
                .unwrap();
        }

        let trips = ListTripsHandler::new(store).handle().await.unwrap();
        let names: Vec<&str> = trips.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn store_failure_surfaces_message() {
        let err = ListTripsHandler::new(Arc::new(FailingTripReader))
            .handle()
            .await
            .unwrap_err();
        assert_eq!(
            err,
            TripError::Store("Failed to fetch trips: connection reset".to_string())
        );
    }
}
