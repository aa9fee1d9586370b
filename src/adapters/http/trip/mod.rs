//! HTTP adapter for trip endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AccommodationResponse, ConditionResponse, ErrorResponse, ExportResponse, MessageResponse,
    PathSegmentResponse, TripRequest, TripResponse,
};
pub use handlers::TripAppState;
pub use routes::trip_router;
