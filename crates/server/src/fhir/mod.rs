//! Outbound access to the FHIR store

mod client;

pub use client::{FhirClient, FhirClientError};
