//! HTTP handlers for trip endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::handlers::trip::{
    CreateTripCommand, CreateTripHandler, DeleteTripCommand, DeleteTripHandler,
    ExportTripHandler, ExportTripQuery, GetTripHandler, GetTripQuery, ListTripsHandler,
    UpdateTripCommand, UpdateTripHandler,
};
use crate::domain::foundation::TripId;
use crate::domain::trip::TripError;
use crate::ports::{TripDocumentRenderer, TripReader, TripRepository};

use super::dto::{ErrorResponse, ExportResponse, MessageResponse, TripRequest, TripResponse};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct TripAppState {
    pub repository: Arc<dyn TripRepository>,
    pub reader: Arc<dyn TripReader>,
    pub renderer: Arc<dyn TripDocumentRenderer>,
}

impl TripAppState {
    pub fn new(
        repository: Arc<dyn TripRepository>,
        reader: Arc<dyn TripReader>,
        renderer: Arc<dyn TripDocumentRenderer>,
    ) -> Self {
        Self {
            repository,
            reader,
            renderer,
        }
    }

    pub fn create_trip_handler(&self) -> CreateTripHandler {
        CreateTripHandler::new(self.repository.clone())
    }

    pub fn update_trip_handler(&self) -> UpdateTripHandler {
        UpdateTripHandler::new(self.repository.clone())
    }

    pub fn delete_trip_handler(&self) -> DeleteTripHandler {
        DeleteTripHandler::new(self.repository.clone())
    }

    pub fn get_trip_handler(&self) -> GetTripHandler {
        GetTripHandler::new(self.reader.clone())
    }

    pub fn list_trips_handler(&self) -> ListTripsHandler {
        ListTripsHandler::new(self.reader.clone())
    }

    pub fn export_trip_handler(&self) -> ExportTripHandler {
        ExportTripHandler::new(self.reader.clone(), self.renderer.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /trips - Create a new trip
pub async fn create_trip(
    State(state): State<TripAppState>,
    body: Result<Json<TripRequest>, JsonRejection>,
) -> Response {
    let fields = match parse_body(body) {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    match state
        .create_trip_handler()
        .handle(CreateTripCommand { fields })
        .await
    {
        Ok(trip) => (StatusCode::CREATED, Json(TripResponse::from(&trip))).into_response(),
        Err(e) => handle_trip_error(e),
    }
}

/// PUT /trips/:id - Replace a trip's fields
pub async fn update_trip(
    State(state): State<TripAppState>,
    Path(trip_id): Path<String>,
    body: Result<Json<TripRequest>, JsonRejection>,
) -> Response {
    let trip_id = match parse_trip_id(&trip_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    // Unknown ids are reported before the body is looked at.
    if let Err(e) = state
        .get_trip_handler()
        .handle(GetTripQuery { trip_id })
        .await
    {
        return handle_trip_error(e);
    }
    let fields = match parse_body(body) {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    match state
        .update_trip_handler()
        .handle(UpdateTripCommand { trip_id, fields })
        .await
    {
        Ok(trip) => (StatusCode::OK, Json(TripResponse::from(&trip))).into_response(),
        Err(e) => handle_trip_error(e),
    }
}

/// DELETE /trips/:id - Delete a trip and its paths
pub async fn delete_trip(
    State(state): State<TripAppState>,
    Path(trip_id): Path<String>,
) -> Response {
    let trip_id = match parse_trip_id(&trip_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .delete_trip_handler()
        .handle(DeleteTripCommand { trip_id })
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Trip deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_trip_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /trips - List every trip
pub async fn list_trips(State(state): State<TripAppState>) -> Response {
    match state.list_trips_handler().handle().await {
        Ok(trips) => {
            let response: Vec<TripResponse> = trips.iter().map(TripResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_trip_error(e),
    }
}

/// GET /trips/:id - Get one trip
pub async fn get_trip(
    State(state): State<TripAppState>,
    Path(trip_id): Path<String>,
) -> Response {
    let trip_id = match parse_trip_id(&trip_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .get_trip_handler()
        .handle(GetTripQuery { trip_id })
        .await
    {
        Ok(trip) => (StatusCode::OK, Json(TripResponse::from(&trip))).into_response(),
        Err(e) => handle_trip_error(e),
    }
}

/// GET|POST /trips/:id/export - Render the trip into a document
pub async fn export_trip(
    State(state): State<TripAppState>,
    Path(trip_id): Path<String>,
) -> Response {
    let trip_id = match parse_trip_id(&trip_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .export_trip_handler()
        .handle(ExportTripQuery { trip_id })
        .await
    {
        Ok(document) => (StatusCode::OK, Json(ExportResponse::from(document))).into_response(),
        Err(e) => handle_trip_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_trip_id(raw: &str) -> Result<TripId, Response> {
    raw.parse::<TripId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Invalid trip ID: {}", raw))),
        )
            .into_response()
    })
}

fn parse_body(
    body: Result<Json<TripRequest>, JsonRejection>,
) -> Result<crate::domain::trip::TripFields, Response> {
    let Json(req) = body.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(rejection.body_text())),
        )
            .into_response()
    })?;

    req.into_fields()
        .map_err(|e| handle_trip_error(TripError::from(e)))
}

/// Maps trip errors to HTTP responses.
fn handle_trip_error(error: TripError) -> Response {
    match error {
        TripError::ValidationFailed { field, message } => {
            tracing::debug!(%field, %message, "Rejected trip request");
            (
                StatusCode::BAD_REQUEST,
                Json(
                    ErrorResponse::new("VALIDATION_FAILED", message)
                        .with_details(json!({ "field": field })),
                ),
            )
                .into_response()
        }
        TripError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(error.code(), error.to_string())),
        )
            .into_response(),
        TripError::Upstream { status, ref body } => {
            tracing::error!(status, body = %body, "Template service rejected export");
            let response = ErrorResponse::new(error.code(), error.to_string())
                .with_details(json!({ "status": status, "body": body }));
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
        other => {
            tracing::error!(code = other.code(), error = %other, "Trip request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(other.code(), other.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TripId;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn parse_trip_id_rejects_non_integer() {
        let response = parse_trip_id("abc").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn parse_trip_id_accepts_integer() {
        assert_eq!(parse_trip_id("12").unwrap(), TripId::new(12));
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = handle_trip_error(TripError::NotFound(TripId::new(9)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["code"], "TRIP_NOT_FOUND");
        assert_eq!(body["message"], "Trip not found: 9");
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_field() {
        let response = handle_trip_error(TripError::validation("days", "too large"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["details"]["field"], "days");
    }

    #[tokio::test]
    async fn upstream_maps_to_500_with_status_and_body() {
        let response = handle_trip_error(TripError::Upstream {
            status: 403,
            body: "forbidden".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["code"], "UPSTREAM_ERROR");
        assert_eq!(body["details"]["status"], 403);
        assert_eq!(body["details"]["body"], "forbidden");
    }

    #[tokio::test]
    async fn store_error_maps_to_500_with_message() {
        let response = handle_trip_error(TripError::store("Failed to delete trip 3: gone"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Failed to delete trip 3: gone");
    }
}
