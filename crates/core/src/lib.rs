//! fall-report-core: domain logic for the nurse fall-report service
//!
//! Everything in this crate is pure: name splitting, the FHIR searchset
//! model and its nurse-view projection, report request extraction, page
//! layout and PDF rendering. HTTP and configuration live in the server crate.

pub mod bundle;
pub mod error;
pub mod layout;
pub mod name;
pub mod nurse_view;
pub mod pdf;
pub mod report;

pub use bundle::{SearchBundle, SearchEntry};
pub use error::ReportError;
pub use layout::{FontWeight, ReportLayout, TextLine};
pub use name::NameQuery;
pub use nurse_view::{NurseView, project};
pub use pdf::{render_pdf, render_report};
pub use report::{FallReportRequest, ReportFields};
