//! Health check endpoint

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: String,
    fhir_endpoint_configured: bool,
}

/// GET /health - Report liveness and whether patient lookup can reach a store
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        fhir_endpoint_configured: state.fhir.is_some(),
    })
}
