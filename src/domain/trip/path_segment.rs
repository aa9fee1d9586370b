//! Shortest-path segments owned by a trip.

use crate::domain::foundation::{PathSegmentId, TripId};

/// One leg of a trip's itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub id: PathSegmentId,
    pub trip_id: TripId,
    pub day: i32,
    /// Position within the day.
    pub path_index: i32,
    /// Origin location code.
    pub from_code: String,
    /// Destination location code.
    pub to_code: String,
    /// Segment type, e.g. `"Activity"`.
    pub kind: String,
    pub distance: f64,
    pub activity_description: String,
    pub start_time: String,
    pub end_time: String,
}

impl PathSegment {
    /// Key the aggregate is ordered by.
    pub fn order_key(&self) -> (i32, i32) {
        (self.day, self.path_index)
    }
}

/// Sorts segments by day, then path index. Stable for equal keys.
pub fn sort_segments(segments: &mut [PathSegment]) {
    segments.sort_by_key(PathSegment::order_key);
}
