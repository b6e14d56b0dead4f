//! Shared router state

use crate::config::Config;
use crate::fhir::{FhirClient, FhirClientError};

/// Per-process handler dependencies, built once at startup
#[derive(Clone, Default)]
pub struct AppState {
    /// `None` when no FHIR endpoint is configured
    pub fhir: Option<FhirClient>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, FhirClientError> {
        let fhir = config
            .fhir_endpoint
            .as_deref()
            .map(|endpoint| FhirClient::new(endpoint, config.upstream_timeout))
            .transpose()?;

        Ok(Self { fhir })
    }
}
