//! Trip reader port (read side).
//!
//! Loads the whole aggregate: the trip, its resolved condition and
//! accommodation, and its path segments ordered by day, then path index.

use crate::domain::foundation::{DomainError, TripId};
use crate::domain::trip::Trip;
use async_trait::async_trait;

/// Read-only access to fully resolved trips.
///
/// A reference that is unset or points at a missing row resolves to `None`;
/// it is never an error.
#[async_trait]
pub trait TripReader: Send + Sync {
    /// Load one trip. Returns `None` if no trip has this id.
    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError>;

    /// Load every trip, ordered by id. Empty store yields an empty list.
    async fn list_all(&self) -> Result<Vec<Trip>, DomainError>;
}
