//! Route configuration for trip endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_trip, delete_trip, export_trip, get_trip, list_trips, update_trip, TripAppState,
};

/// Creates the trip router with all endpoints.
///
/// Routes:
/// - `POST /trips` - Create a trip
/// - `GET /trips` - List trips
/// - `GET /trips/:id` - Get a trip
/// - `PUT /trips/:id` - Replace a trip's fields
/// - `DELETE /trips/:id` - Delete a trip and its paths
/// - `GET|POST /trips/:id/export` - Export a trip through the template service
pub fn trip_router() -> Router<TripAppState> {
    Router::new()
        .route("/trips", get(list_trips).post(create_trip))
        .route(
            "/trips/:id",
            get(get_trip).put(update_trip).delete(delete_trip),
        )
        .route("/trips/:id/export", get(export_trip).post(export_trip))
}
