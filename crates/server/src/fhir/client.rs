//! HTTP client for FHIR Patient search

use std::time::Duration;

use fall_report_core::{NameQuery, SearchBundle};
use thiserror::Error;

/// FHIR store request failures
#[derive(Debug, Error)]
pub enum FhirClientError {
    /// Transport, timeout or status failure. The URL is stripped since its
    /// query string carries the patient's name.
    #[error("{}", error_chain(.0))]
    Http(reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Render an error with its sources, e.g. `error sending request: operation timed out`
fn error_chain(err: &reqwest::Error) -> String {
    let mut msg = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

/// Client for a FHIR store's Patient search endpoint
#[derive(Clone)]
pub struct FhirClient {
    http: reqwest::Client,
    base_url: String,
}

impl From<reqwest::Error> for FhirClientError {
    fn from(err: reqwest::Error) -> Self {
        FhirClientError::Http(err.without_url())
    }
}

impl FhirClient {
    /// Create a client whose requests are bounded by `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FhirClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET {base}/Patient?family=..&given=..
    ///
    /// Only the first page of results is returned; no retries.
    pub async fn search_patients(&self, query: &NameQuery) -> Result<SearchBundle, FhirClientError> {
        let url = format!("{}/Patient", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("family", &query.family), ("given", &query.given)])
            .header(reqwest::header::ACCEPT, "application/fhir+json")
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let bundle: SearchBundle =
            serde_json::from_slice(&body).map_err(|e| FhirClientError::Decode(e.to_string()))?;

        if bundle.next_link().is_some() {
            tracing::debug!(total = ?bundle.total, "Ignoring further result pages");
        }

        Ok(bundle)
    }
}
