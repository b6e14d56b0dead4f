//! Fall report request parsing and field resolution

use serde_json::{Map, Value as JsonValue};

use crate::error::ReportError;

/// Placeholder printed for any missing patient field
pub const NOT_AVAILABLE: &str = "N/A";

/// Fall report request as submitted by the client.
///
/// Kept as raw JSON: fields are not type-checked, only resolved to
/// printable strings by [`FallReportRequest::fields`].
#[derive(Debug, Clone, Default)]
pub struct FallReportRequest {
    patient: Map<String, JsonValue>,
    nurse_notes: Option<JsonValue>,
    place_of_fall: Option<JsonValue>,
}

/// Resolved strings printed on the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFields {
    pub patient_name: String,
    pub patient_id: String,
    pub gender: String,
    pub birth_date: String,
    pub place_of_fall: String,
    pub nurse_notes: String,
}

impl FallReportRequest {
    /// Parse a request body. Anything other than a JSON object is rejected.
    pub fn from_json(body: &[u8]) -> Result<Self, ReportError> {
        let value: JsonValue =
            serde_json::from_slice(body).map_err(|e| ReportError::InvalidJson(e.to_string()))?;

        let JsonValue::Object(mut root) = value else {
            return Err(ReportError::InvalidJson(
                "expected a JSON object at the top level".to_string(),
            ));
        };

        let patient = match root.remove("patient") {
            Some(JsonValue::Object(patient)) => patient,
            _ => Map::new(),
        };

        Ok(Self {
            patient,
            nurse_notes: root.remove("nurseNotes"),
            place_of_fall: root.remove("placeOfFall"),
        })
    }

    pub fn fields(&self) -> ReportFields {
        let patient_field = |key: &str| {
            self.patient
                .get(key)
                .and_then(display_value)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };

        let patient_name = self
            .patient
            .get("name")
            .and_then(display_name)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let place_of_fall = self
            .place_of_fall
            .as_ref()
            .and_then(|v| match v.get("label") {
                Some(JsonValue::String(label)) => Some(label.clone()),
                _ => display_value(v),
            })
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        ReportFields {
            patient_name,
            patient_id: patient_field("id"),
            gender: patient_field("gender"),
            birth_date: patient_field("birthDate"),
            place_of_fall,
            nurse_notes: self
                .nurse_notes
                .as_ref()
                .and_then(display_value)
                .unwrap_or_default(),
        }
    }
}

/// Strings print as-is, `null` counts as absent, anything else prints as compact JSON
fn display_value(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Patient names arrive either as plain strings or as FHIR HumanName(s)
fn display_name(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Array(names) => names
            .iter()
            .find_map(human_name)
            .or_else(|| display_value(value)),
        JsonValue::Object(_) => human_name(value).or_else(|| display_value(value)),
        other => display_value(other),
    }
}

fn human_name(name: &JsonValue) -> Option<String> {
    if let Some(text) = name.get("text").and_then(JsonValue::as_str) {
        return Some(text.to_string());
    }

    let mut parts: Vec<&str> = name
        .get("given")
        .and_then(JsonValue::as_array)
        .map(|given| given.iter().filter_map(JsonValue::as_str).collect())
        .unwrap_or_default();
    if let Some(family) = name.get("family").and_then(JsonValue::as_str) {
        parts.push(family);
    }

    let joined = parts.join(" ");
    (!joined.trim().is_empty()).then_some(joined)
}
