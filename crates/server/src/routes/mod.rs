pub mod health;
pub mod metrics;
mod patient;
mod report;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the patient lookup and report routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/patient", get(patient::lookup))
        .route("/generate-pdf", post(report::generate))
}
