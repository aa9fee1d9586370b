//! Trip domain module.
//!
//! The trip aggregate: a trip row, its optional condition and accommodation
//! references, and its ordered path segments.

mod aggregate;
mod errors;
mod path_segment;
mod references;

pub use aggregate::{Trip, TripFields, MAX_DAYS};
pub use errors::TripError;
pub use path_segment::{sort_segments, PathSegment};
pub use references::{Accommodation, Condition};
