use serde::Deserialize;
use serde_json::Value as JsonValue;

/// FHIR searchset Bundle, reduced to what the patient lookup reads.
///
/// Unknown fields are ignored; `entry` may be missing or `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchBundle {
    #[serde(default)]
    pub total: Option<u32>,

    #[serde(default)]
    pub link: Option<Vec<BundleLink>>,

    #[serde(default)]
    pub entry: Option<Vec<SearchEntry>>,
}

/// Bundle link (`self`, `next`, ...)
#[derive(Debug, Clone, Deserialize)]
pub struct BundleLink {
    pub relation: String,
    pub url: String,
}

/// Single search match
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEntry {
    #[serde(default)]
    pub resource: Option<JsonValue>,
}

impl SearchBundle {
    pub fn entries(&self) -> &[SearchEntry] {
        self.entry.as_deref().unwrap_or_default()
    }

    /// Resources in entry order; an entry without a resource yields `Null`.
    pub fn resources(&self) -> impl Iterator<Item = &JsonValue> {
        self.entries()
            .iter()
            .map(|e| e.resource.as_ref().unwrap_or(&JsonValue::Null))
    }

    /// URL of the next page, if the store paginated the result
    pub fn next_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|l| l.relation == "next")
            .map(|l| l.url.as_str())
    }
}
