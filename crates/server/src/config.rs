//! Server configuration

use std::time::Duration;

/// Default bound on the outbound FHIR request
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    /// Base URL of the FHIR store; lookups fail with a configuration error when unset
    pub fhir_endpoint: Option<String>,
    pub upstream_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let upstream_timeout = var("UPSTREAM_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT);

        Self {
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8080".into()),
            fhir_endpoint: var("FHIR_ENDPOINT")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            upstream_timeout,
            cors_origins: var("CORS_ORIGINS")
                .unwrap_or_else(|| "*".into())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let c = config(&[]);
        assert_eq!(c.bind_address, "0.0.0.0:8080");
        assert_eq!(c.fhir_endpoint, None);
        assert_eq!(c.upstream_timeout, DEFAULT_UPSTREAM_TIMEOUT);
        assert_eq!(c.cors_origins, vec!["*"]);
    }

    #[test]
    fn empty_endpoint_is_unset() {
        assert_eq!(config(&[("FHIR_ENDPOINT", "  ")]).fhir_endpoint, None);
    }

    #[test]
    fn explicit_values() {
        let c = config(&[
            ("FHIR_ENDPOINT", "https://healthlake.example/datastore/r4/"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
        ]);
        assert_eq!(
            c.fhir_endpoint.as_deref(),
            Some("https://healthlake.example/datastore/r4/")
        );
        assert_eq!(c.upstream_timeout, Duration::from_secs(3));
        assert_eq!(c.cors_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn invalid_timeout_falls_back() {
        assert_eq!(
            config(&[("UPSTREAM_TIMEOUT_SECS", "soon")]).upstream_timeout,
            DEFAULT_UPSTREAM_TIMEOUT
        );
        assert_eq!(
            config(&[("UPSTREAM_TIMEOUT_SECS", "0")]).upstream_timeout,
            DEFAULT_UPSTREAM_TIMEOUT
        );
    }
}
