//! Audit logging for patient data access

use axum::{body::Body, extract::Request, middleware::Next, response::Response};

use super::request_id::RequestId;

/// Paths that touch patient data
const AUDITED_PATHS: &[&str] = &["/patient", "/generate-pdf"];

/// Middleware to log every patient lookup and report generation.
///
/// Only method, path and status are recorded; query strings and bodies
/// carry patient identifiers and are never logged.
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let response = next.run(request).await;

    if AUDITED_PATHS.contains(&path.as_str()) {
        let status = response.status().as_u16();

        tracing::info!(
            target: "audit",
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status,
            "Patient data access"
        );
    }

    response
}
