//! Patient lookup handler

use axum::{
    Json,
    extract::{RawQuery, State},
};
use fall_report_core::{NameQuery, NurseView, project};

use crate::error::AppError;
use crate::state::AppState;

/// Query parameter carrying the free-text name, e.g. `John Smith`
const NAME_PARAM: &str = "name";

/// GET /patient?name=<given> <family> - Search the FHIR store and return nurse views
///
/// The raw query is parsed here rather than by an extractor so every input,
/// including repeated parameters, goes through the configuration check and
/// the JSON error contract.
pub async fn lookup(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<NurseView>>, AppError> {
    let client = state.fhir.as_ref().ok_or(AppError::Configuration)?;

    let full_name = query
        .as_deref()
        .and_then(name_param)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::bad_request("Missing patient name"))?;

    let query = NameQuery::parse(&full_name);
    let bundle = client.search_patients(&query).await?;
    let views = project(&bundle);

    tracing::info!(matches = views.len(), "Patient lookup complete");

    Ok(Json(views))
}

/// Value of `name`; when repeated, the last occurrence wins
fn name_param(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == NAME_PARAM)
        .last()
        .map(|(_, value)| value.into_owned())
}
