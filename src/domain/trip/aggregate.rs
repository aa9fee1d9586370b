//! Trip aggregate entity.
//!
//! A trip is the root of the itinerary aggregate. It references a condition
//! and an accommodation (both optional, neither owned) and owns its path
//! segments.
//!
//! # Ownership
//!
//! Path segments are produced elsewhere. The trip only reads them, and they
//! are removed together with the trip.

use chrono::{DateTime, Utc};

use super::path_segment::{sort_segments, PathSegment};
use super::references::{Accommodation, Condition};
use crate::domain::foundation::{AccommodationId, ConditionId, TripId, ValidationError};

/// Upper bound for `days`; the column is a 32-bit integer.
pub const MAX_DAYS: u32 = i32::MAX as u32;

/// The caller-supplied, replaceable fields of a trip.
///
/// Used both for creation and for full-field update. Path segments are
/// deliberately absent: updates never touch them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripFields {
    pub name: String,
    pub trip_type: String,
    pub days: u32,
    pub condition_id: Option<ConditionId>,
    pub accommodation_id: Option<AccommodationId>,
}

impl TripFields {
    /// Builds the field set, rejecting values the store cannot hold.
    ///
    /// Condition and accommodation ids are not checked for existence.
    pub fn new(
        name: impl Into<String>,
        trip_type: impl Into<String>,
        days: u32,
        condition_id: Option<ConditionId>,
        accommodation_id: Option<AccommodationId>,
    ) -> Result<Self, ValidationError> {
        if days > MAX_DAYS {
            return Err(ValidationError::out_of_range(
                "days",
                0,
                i64::from(MAX_DAYS),
                i64::from(days),
            ));
        }

        Ok(Self {
            name: name.into(),
            trip_type: trip_type.into(),
            days,
            condition_id,
            accommodation_id,
        })
    }

    /// `days` as stored in the database.
    pub fn days_i32(&self) -> i32 {
        i32::try_from(self.days).unwrap_or(i32::MAX)
    }
}

/// Trip aggregate with its references resolved.
///
/// # Invariants
///
/// - `paths` is ordered by day, then by path index within the day
/// - `condition` / `accommodation` are `None` when the reference is unset or
///   does not resolve
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    id: TripId,
    name: String,
    trip_type: String,
    days: u32,
    condition_id: Option<ConditionId>,
    accommodation_id: Option<AccommodationId>,
    condition: Option<Condition>,
    accommodation: Option<Accommodation>,
    paths: Vec<PathSegment>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Trip {
    /// Reconstitute a trip from persistence.
    ///
    /// Segments are re-sorted so the ordering invariant holds whatever order
    /// the adapter produced them in.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TripId,
        fields: TripFields,
        condition: Option<Condition>,
        accommodation: Option<Accommodation>,
        mut paths: Vec<PathSegment>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        sort_segments(&mut paths);
        Self {
            id,
            name: fields.name,
            trip_type: fields.trip_type,
            days: fields.days,
            condition_id: fields.condition_id,
            accommodation_id: fields.accommodation_id,
            condition,
            accommodation,
            paths,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form classification tag.
    pub fn trip_type(&self) -> &str {
        &self.trip_type
    }

    /// Duration in days.
    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn condition_id(&self) -> Option<ConditionId> {
        self.condition_id
    }

    pub fn accommodation_id(&self) -> Option<AccommodationId> {
        self.accommodation_id
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn accommodation(&self) -> Option<&Accommodation> {
        self.accommodation.as_ref()
    }

    /// Path segments ordered by (day, path_index).
    pub fn paths(&self) -> &[PathSegment] {
        &self.paths
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    /// Current replaceable fields.
    pub fn fields(&self) -> TripFields {
        TripFields {
            name: self.name.clone(),
            trip_type: self.trip_type.clone(),
            days: self.days,
            condition_id: self.condition_id,
            accommodation_id: self.accommodation_id,
        }
    }
}
