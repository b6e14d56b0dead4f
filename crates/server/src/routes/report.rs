//! Fall report PDF handler

use axum::{
    body::Bytes,
    http::{HeaderName, StatusCode, header},
    response::IntoResponse,
};
use fall_report_core::{FallReportRequest, render_report};

use crate::error::AppError;

pub const REPORT_FILENAME: &str = "fall_report.pdf";

/// Marks the body as base64 text rather than raw PDF bytes
const CONTENT_TRANSFER_ENCODING: HeaderName = HeaderName::from_static("content-transfer-encoding");

/// POST /generate-pdf - Render a fall report and return it base64-encoded
pub async fn generate(body: Bytes) -> Result<impl IntoResponse, AppError> {
    let request = FallReportRequest::from_json(&body)?;
    let encoded = render_report(&request.fields())?;

    tracing::info!(size = encoded.len(), "Fall report generated");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={REPORT_FILENAME}"),
            ),
            (CONTENT_TRANSFER_ENCODING, "base64".to_string()),
        ],
        encoded,
    ))
}
