//! Flattens path segments into template merge records.

use serde::Serialize;

use super::sanitize::sanitize;
use crate::domain::trip::PathSegment;

/// One path entry as the template expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRecord {
    pub day: i32,
    pub path_index: i32,
    pub from: String,
    pub distance: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<&PathSegment> for PathRecord {
    fn from(segment: &PathSegment) -> Self {
        Self {
            day: segment.day,
            path_index: segment.path_index,
            from: sanitize(&segment.from_code),
            distance: sanitize(&segment.distance.to_string()),
            description: sanitize(&segment.activity_description),
            start_time: sanitize(&segment.start_time),
            end_time: sanitize(&segment.end_time),
        }
    }
}

/// Formats segments in input order. Callers pass them pre-sorted.
pub fn format_paths(segments: &[PathSegment]) -> Vec<PathRecord> {
    segments.iter().map(PathRecord::from).collect()
}
