//! Nurse-facing projection of FHIR Patient resources

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::bundle::SearchBundle;

/// The five patient fields shown to nurses.
///
/// Values are copied verbatim from the resource; absent fields serialize as `null`,
/// except `allergies` which defaults to an empty list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NurseView {
    pub id: Option<JsonValue>,
    pub name: Option<JsonValue>,
    pub gender: Option<JsonValue>,
    pub birth_date: Option<JsonValue>,
    pub allergies: JsonValue,
}

impl NurseView {
    pub fn from_resource(resource: &JsonValue) -> Self {
        let field = |key: &str| resource.get(key).cloned();

        Self {
            id: field("id"),
            name: field("name"),
            gender: field("gender"),
            birth_date: field("birthDate"),
            allergies: field("allergyIntolerance").unwrap_or_else(|| JsonValue::Array(Vec::new())),
        }
    }
}

/// Project every entry of a searchset, preserving order
pub fn project(bundle: &SearchBundle) -> Vec<NurseView> {
    bundle.resources().map(NurseView::from_resource).collect()
}
