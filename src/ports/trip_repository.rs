//! Trip repository port (write side).
//!
//! Defines the contract for persisting Trip aggregates.
//!
//! # Design
//!
//! - **Root-only writes**: create and update touch the trip row only;
//!   conditions, accommodations and path segments are never written here
//! - **Aggregate delete**: deleting a trip removes its path segments first,
//!   within one atomic unit

use crate::domain::foundation::{DomainError, TripId};
use crate::domain::trip::{Trip, TripFields};
use async_trait::async_trait;

/// Repository port for Trip aggregate persistence.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Insert a new trip and return it with its store-assigned id.
    ///
    /// Condition and accommodation ids are stored as given, without an
    /// existence check.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, fields: &TripFields) -> Result<Trip, DomainError>;

    /// Replace name, type, days and both references of an existing trip.
    ///
    /// Path segments are left untouched. Returns the reloaded aggregate.
    ///
    /// # Errors
    ///
    /// - `TripNotFound` if no trip has this id
    /// - `DatabaseError` on persistence failure
    async fn update(&self, id: &TripId, fields: &TripFields) -> Result<Trip, DomainError>;

    /// Delete a trip and every path segment it owns.
    ///
    /// Deleting an id with no trip succeeds.
    ///
    /// # Errors
    ///
    /// - `PathDeleteFailed` if the segment delete fails (trip is kept)
    /// - `TripDeleteFailed` if the trip delete fails (segments are restored)
    /// - `DatabaseError` if the unit of work cannot begin or commit
    async fn delete(&self, id: &TripId) -> Result<(), DomainError>;
}
