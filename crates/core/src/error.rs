use thiserror::Error;

/// Fall report errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("PDF rendering failed: {0}")]
    Render(String),
}
