//! Read-only entities a trip points at.

use crate::domain::foundation::{AccommodationId, ConditionId};

/// Travel condition (e.g. travel style) referenced by a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub id: ConditionId,
    /// Descriptive style label.
    pub style: String,
}

/// Accommodation referenced by a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accommodation {
    pub id: AccommodationId,
    pub name: String,
}
