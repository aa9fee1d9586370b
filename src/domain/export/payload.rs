//! Template payload built from a loaded trip, and the rendered result.

use serde::Serialize;
use serde_json::Value;

use super::path_formatter::{format_paths, PathRecord};
use super::sanitize::sanitize;
use crate::domain::trip::Trip;

/// Request body for the template service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripTemplatePayload {
    pub merge_fields: MergeFields,
}

/// Values merged into the document template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeFields {
    pub trip_name: String,
    pub trip_type: String,
    /// Condition style, or `""` when the trip has none.
    pub condition: String,
    /// Accommodation name, or `""` when the trip has none.
    pub accommodation: String,
    pub paths: Vec<PathRecord>,
}

impl TripTemplatePayload {
    /// Builds the payload. Every free-text value is sanitized.
    pub fn from_trip(trip: &Trip) -> Self {
        let condition = trip
            .condition()
            .map(|c| sanitize(&c.style))
            .unwrap_or_default();
        let accommodation = trip
            .accommodation()
            .map(|a| sanitize(&a.name))
            .unwrap_or_default();

        Self {
            merge_fields: MergeFields {
                trip_name: sanitize(trip.name()),
                trip_type: sanitize(trip.trip_type()),
                condition,
                accommodation,
                paths: format_paths(trip.paths()),
            },
        }
    }
}

/// Decoded response of the template service.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    /// Where the generated document can be downloaded, if reported.
    pub download_url: Option<String>,
    /// Full response object as returned by the service.
    pub raw: Value,
}

impl ExportedDocument {
    /// Wraps a decoded response, lifting `download_url` out when it is a string.
    pub fn from_response(raw: Value) -> Self {
        let download_url = raw
            .get("download_url")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self { download_url, raw }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AccommodationId, ConditionId, PathSegmentId, TripId};
    use crate::domain::trip::{Accommodation, Condition, PathSegment, TripFields};
    use chrono::Utc;
    use serde_json::json;

    fn trip(condition: Option<Condition>, accommodation: Option<Accommodation>) -> Trip {
        let now = Utc::now();
        let fields = TripFields::new(
            "Bangkok {Tour}",
            "leisure",
            2,
            condition.as_ref().map(|c| c.id),
            accommodation.as_ref().map(|a| a.id),
        )
        .unwrap();
        let paths = vec![PathSegment {
            id: PathSegmentId::new(1),
            trip_id: TripId::new(1),
            day: 1,
            path_index: 1,
            from_code: "A1".to_string(),
            to_code: "P1".to_string(),
            kind: "Activity".to_string(),
            distance: 0.0,
            activity_description: "Check in".to_string(),
            start_time: "14:00".to_string(),
            end_time: "15:00".to_string(),
        }];
        Trip::reconstitute(TripId::new(1), fields, condition, accommodation, paths, now, now)
    }

    #[test]
    fn missing_references_become_empty_strings() {
        let payload = TripTemplatePayload::from_trip(&trip(None, None));
        assert_eq!(payload.merge_fields.condition, "");
        assert_eq!(payload.merge_fields.accommodation, "");
    }

    #[test]
    fn references_are_sanitized() {
        let payload = TripTemplatePayload::from_trip(&trip(
            Some(Condition {
                id: ConditionId::new(1),
                style: "Relax & <slow>".to_string(),
            }),
            Some(Accommodation {
                id: AccommodationId::new(2),
                name: "Hotel \"Riva\"".to_string(),
            }),
        ));
        assert_eq!(payload.merge_fields.condition, "Relax  slow");
        assert_eq!(payload.merge_fields.accommodation, "Hotel Riva");
        assert_eq!(payload.merge_fields.trip_name, "Bangkok Tour");
    }

    #[test]
    fn serializes_under_merge_fields_key() {
        let value = serde_json::to_value(TripTemplatePayload::from_trip(&trip(None, None))).unwrap();
        assert_eq!(value["merge_fields"]["trip_type"], "leisure");
        assert_eq!(value["merge_fields"]["paths"][0]["from"], "A1");
    }

    #[test]
    fn exported_document_extracts_download_url() {
        let doc = ExportedDocument::from_response(json!({
            "status": "success",
            "download_url": "https://cdn.example.com/trip.pdf",
        }));
        assert_eq!(doc.download_url.as_deref(), Some("https://cdn.example.com/trip.pdf"));
    }

    #[test]
    fn exported_document_tolerates_missing_download_url() {
        let doc = ExportedDocument::from_response(json!({"status": "success"}));
        assert!(doc.download_url.is_none());
        assert_eq!(doc.raw["status"], "success");
    }
}
