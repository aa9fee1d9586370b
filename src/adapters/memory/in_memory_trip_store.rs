//! In-Memory Trip Store Adapter
//!
//! Implements both trip ports over in-process maps.
//! Useful for testing and local development.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    AccommodationId, ConditionId, DomainError, ErrorCode, PathSegmentId, TripId,
};
use crate::domain::trip::{Accommodation, Condition, PathSegment, Trip, TripFields};
use crate::ports::{TripReader, TripRepository};

#[derive(Debug, Clone)]
struct TripRow {
    fields: TripFields,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct StoreState {
    next_id: i64,
    trips: BTreeMap<i64, TripRow>,
    conditions: BTreeMap<i64, Condition>,
    accommodations: BTreeMap<i64, Accommodation>,
    paths: Vec<PathSegment>,
}

impl StoreState {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn resolve(&self, id: i64, row: &TripRow) -> Trip {
        let condition = row
            .fields
            .condition_id
            .and_then(|c| self.conditions.get(&c.as_i64()).cloned());
        let accommodation = row
            .fields
            .accommodation_id
            .and_then(|a| self.accommodations.get(&a.as_i64()).cloned());
        let paths = self
            .paths
            .iter()
            .filter(|p| p.trip_id.as_i64() == id)
            .cloned()
            .collect();

        Trip::reconstitute(
            TripId::new(id),
            row.fields.clone(),
            condition,
            accommodation,
            paths,
            row.created_at,
            row.updated_at,
        )
    }
}

/// In-memory storage for the trip aggregate.
///
/// One lock guards every table, so each operation (including the two-step
/// delete) is atomic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTripStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a condition row.
    pub async fn add_condition(&self, style: impl Into<String>) -> ConditionId {
        let mut state = self.state.write().await;
        let id = ConditionId::new(state.allocate_id());
        state.conditions.insert(
            id.as_i64(),
            Condition {
                id,
                style: style.into(),
            },
        );
        id
    }

    /// Seed an accommodation row.
    pub async fn add_accommodation(&self, name: impl Into<String>) -> AccommodationId {
        let mut state = self.state.write().await;
        let id = AccommodationId::new(state.allocate_id());
        state.accommodations.insert(
            id.as_i64(),
            Accommodation {
                id,
                name: name.into(),
            },
        );
        id
    }

    /// Seed a path segment. The segment's `id` is replaced with a fresh one.
    pub async fn add_path_segment(&self, mut segment: PathSegment) -> PathSegmentId {
        let mut state = self.state.write().await;
        let id = PathSegmentId::new(state.allocate_id());
        segment.id = id;
        state.paths.push(segment);
        id
    }

    /// Number of stored segments owned by a trip.
    pub async fn path_count(&self, trip_id: &TripId) -> usize {
        self.state
            .read()
            .await
            .paths
            .iter()
            .filter(|p| p.trip_id == *trip_id)
            .count()
    }

    /// Number of stored trips.
    pub async fn trip_count(&self) -> usize {
        self.state.read().await.trips.len()
    }
}

#[async_trait]
impl TripRepository for InMemoryTripStore {
    async fn create(&self, fields: &TripFields) -> Result<Trip, DomainError> {
        let mut state = self.state.write().await;
        let id = state.allocate_id();
        let now = Utc::now();
        let row = TripRow {
            fields: fields.clone(),
            created_at: now,
            updated_at: now,
        };
        let trip = state.resolve(id, &row);
        state.trips.insert(id, row);
        Ok(trip)
    }

    async fn update(&self, id: &TripId, fields: &TripFields) -> Result<Trip, DomainError> {
        let mut state = self.state.write().await;
        let row = state.trips.get_mut(&id.as_i64()).ok_or_else(|| {
            DomainError::new(ErrorCode::TripNotFound, format!("Trip not found: {}", id))
        })?;
        row.fields = fields.clone();
        row.updated_at = Utc::now();
        let row = row.clone();
        Ok(state.resolve(id.as_i64(), &row))
    }

    async fn delete(&self, id: &TripId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state.paths.retain(|p| p.trip_id != *id);
        state.trips.remove(&id.as_i64());
        Ok(())
    }
}

#[async_trait]
impl TripReader for InMemoryTripStore {
    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .trips
            .get(&id.as_i64())
            .map(|row| state.resolve(id.as_i64(), row)))
    }

    async fn list_all(&self) -> Result<Vec<Trip>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .trips
            .iter()
            .map(|(id, row)| state.resolve(*id, row))
            .collect())
    }
}
