//! Strongly-typed identifier value objects.
//!
//! All identifiers are assigned by the store (`BIGSERIAL`), so they wrap an
//! `i64` and are never generated in process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(i64);

impl TripId {
    /// Wraps a store-assigned identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier for binding into queries.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TripId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Identifier of a travel condition referenced by a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionId(i64);

impl ConditionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an accommodation referenced by a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccommodationId(i64);

impl AccommodationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccommodationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a single path segment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathSegmentId(i64);

impl PathSegmentId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PathSegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_id_parses_from_string() {
        let id: TripId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn trip_id_parse_tolerates_surrounding_whitespace() {
        let id: TripId = " 7 ".parse().unwrap();
        assert_eq!(id, TripId::new(7));
    }

    #[test]
    fn trip_id_rejects_non_numeric() {
        assert!("abc".parse::<TripId>().is_err());
        assert!("".parse::<TripId>().is_err());
    }

    #[test]
    fn trip_id_displays_raw_number() {
        assert_eq!(TripId::new(15).to_string(), "15");
    }

    #[test]
    fn trip_id_serializes_transparently() {
        let json = serde_json::to_string(&TripId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn reference_ids_deserialize_from_integers() {
        let condition: ConditionId = serde_json::from_str("1").unwrap();
        let accommodation: AccommodationId = serde_json::from_str("9").unwrap();
        assert_eq!(condition.as_i64(), 1);
        assert_eq!(accommodation.as_i64(), 9);
    }
}
