//! HTTP DTOs for trip endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.
//! Request fields also accept the capitalised names older clients send
//! (`Name`, `Types`, `Days`, `Con_id`, `Acc_id`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::export::ExportedDocument;
use crate::domain::foundation::{AccommodationId, ConditionId, ValidationError};
use crate::domain::trip::{PathSegment, Trip, TripFields};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of create and update requests.
///
/// Everything except `name` falls back to its zero value when absent, and
/// update overwrites with those zero values.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, rename = "type", alias = "Types", alias = "types")]
    pub trip_type: String,
    #[serde(default, alias = "Days")]
    pub days: u32,
    #[serde(default, alias = "Con_id", alias = "con_id")]
    pub condition_id: Option<i64>,
    #[serde(default, alias = "Acc_id", alias = "acc_id")]
    pub accommodation_id: Option<i64>,
}

impl TripRequest {
    pub fn into_fields(self) -> Result<TripFields, ValidationError> {
        TripFields::new(
            self.name,
            self.trip_type,
            self.days,
            self.condition_id.map(ConditionId::new),
            self.accommodation_id.map(AccommodationId::new),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Resolved condition reference.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionResponse {
    pub id: i64,
    pub style: String,
}

/// Resolved accommodation reference.
#[derive(Debug, Clone, Serialize)]
pub struct AccommodationResponse {
    pub id: i64,
    pub name: String,
}

/// One ordered path segment.
#[derive(Debug, Clone, Serialize)]
pub struct PathSegmentResponse {
    pub id: i64,
    pub trip_id: i64,
    pub day: i32,
    pub path_index: i32,
    pub from_code: String,
    pub to_code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub distance: f64,
    pub activity_description: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<&PathSegment> for PathSegmentResponse {
    fn from(segment: &PathSegment) -> Self {
        Self {
            id: segment.id.as_i64(),
            trip_id: segment.trip_id.as_i64(),
            day: segment.day,
            path_index: segment.path_index,
            from_code: segment.from_code.clone(),
            to_code: segment.to_code.clone(),
            kind: segment.kind.clone(),
            distance: segment.distance,
            activity_description: segment.activity_description.clone(),
            start_time: segment.start_time.clone(),
            end_time: segment.end_time.clone(),
        }
    }
}

/// Trip with its references and paths resolved.
#[derive(Debug, Clone, Serialize)]
pub struct TripResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub trip_type: String,
    pub days: u32,
    pub condition_id: Option<i64>,
    pub accommodation_id: Option<i64>,
    pub condition: Option<ConditionResponse>,
    pub accommodation: Option<AccommodationResponse>,
    pub paths: Vec<PathSegmentResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Trip> for TripResponse {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id().as_i64(),
            name: trip.name().to_string(),
            trip_type: trip.trip_type().to_string(),
            days: trip.days(),
            condition_id: trip.condition_id().map(|id| id.as_i64()),
            accommodation_id: trip.accommodation_id().map(|id| id.as_i64()),
            condition: trip.condition().map(|c| ConditionResponse {
                id: c.id.as_i64(),
                style: c.style.clone(),
            }),
            accommodation: trip.accommodation().map(|a| AccommodationResponse {
                id: a.id.as_i64(),
                name: a.name.clone(),
            }),
            paths: trip.paths().iter().map(Into::into).collect(),
            created_at: trip.created_at().to_rfc3339(),
            updated_at: trip.updated_at().to_rfc3339(),
        }
    }
}

/// Plain acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Successful export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportResponse {
    pub status: String,
    pub download_url: Option<String>,
    /// Full answer of the template service.
    pub result: Value,
}

impl From<ExportedDocument> for ExportResponse {
    fn from(document: ExportedDocument) -> Self {
        Self {
            status: "success".to_string(),
            download_url: document.download_url,
            result: document.raw,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PathSegmentId, TripId};
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn trip_request_deserializes_with_defaults() {
        let req: TripRequest = serde_json::from_str(r#"{"name": "Bangkok Tour"}"#).unwrap();
        assert_eq!(req.name, "Bangkok Tour");
        assert_eq!(req.trip_type, "");
        assert_eq!(req.days, 0);
        assert!(req.condition_id.is_none());
    }

    #[test]
    fn trip_request_accepts_legacy_field_names() {
        let req: TripRequest = serde_json::from_str(
            r#"{"Name": "Tour", "Types": "leisure", "Days": 3, "Con_id": 1, "Acc_id": 2}"#,
        )
        .unwrap();
        assert_eq!(req.trip_type, "leisure");
        assert_eq!(req.days, 3);
        assert_eq!(req.condition_id, Some(1));
        assert_eq!(req.accommodation_id, Some(2));
    }

    #[test]
    fn trip_request_rejects_negative_days() {
        let result: Result<TripRequest, _> =
            serde_json::from_str(r#"{"name": "x", "days": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn trip_request_requires_name() {
        let result: Result<TripRequest, _> = serde_json::from_str(r#"{"type": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn trip_response_serializes_type_and_paths() {
        let now = Utc::now();
        let trip = Trip::reconstitute(
            TripId::new(7),
            TripFields::new("Tour", "leisure", 2, None, None).unwrap(),
            None,
            None,
            vec![PathSegment {
                id: PathSegmentId::new(1),
                trip_id: TripId::new(7),
                day: 1,
                path_index: 1,
                from_code: "A1".to_string(),
                to_code: "P1".to_string(),
                kind: "Travel".to_string(),
                distance: 3.2,
                activity_description: "taxi".to_string(),
                start_time: "08:00".to_string(),
                end_time: "08:20".to_string(),
            }],
            now,
            now,
        );

        let value = serde_json::to_value(TripResponse::from(&trip)).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["type"], "leisure");
        assert_eq!(value["condition"], Value::Null);
        assert_eq!(value["paths"][0]["type"], "Travel");
        assert_eq!(value["paths"][0]["to_code"], "P1");
    }

    #[test]
    fn export_response_wraps_raw_result() {
        let raw = json!({"status": "success", "download_url": "https://x/y.pdf"});
        let response = ExportResponse::from(ExportedDocument::from_response(raw.clone()));
        assert_eq!(response.status, "success");
        assert_eq!(response.download_url.as_deref(), Some("https://x/y.pdf"));
        assert_eq!(response.result, raw);
    }

    #[test]
    fn error_response_omits_empty_details() {
        let value = serde_json::to_value(ErrorResponse::bad_request("Invalid trip ID")).unwrap();
        assert_eq!(value["code"], "BAD_REQUEST");
        assert!(value.get("details").is_none());
    }
}
