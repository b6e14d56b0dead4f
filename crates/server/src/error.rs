//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fall_report_core::ReportError;
use serde::Serialize;

use crate::fhir::FhirClientError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Required environment setup is missing
    Configuration,
    /// Caller input is missing or malformed
    BadRequest {
        error: String,
        details: Option<String>,
    },
    /// The FHIR store could not be queried
    Upstream(String),
    /// Report rendering failed
    Internal(String),
}

/// JSON error body returned to callers
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        AppError::BadRequest {
            error: error.into(),
            details: None,
        }
    }

    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "FHIR endpoint not configured".to_string(),
                    details: None,
                },
            ),
            AppError::BadRequest { error, details } => {
                (StatusCode::BAD_REQUEST, ErrorBody { error, details })
            }
            AppError::Upstream(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Error fetching patient data".to_string(),
                    details: Some(details),
                },
            ),
            AppError::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Error generating PDF".to_string(),
                    details: Some(details),
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %body.error, details = ?body.details, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %body.error, details = ?body.details, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}

impl From<FhirClientError> for AppError {
    fn from(err: FhirClientError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidJson(details) => AppError::BadRequest {
                error: "Invalid JSON input".to_string(),
                details: Some(details),
            },
            ReportError::Render(details) => AppError::Internal(details),
        }
    }
}
