//! Monthly category reports.
//!
//! A report covers one user and one calendar month. It is computed on demand
//! from the costs the store returns for the month's date range:
//! - `ReportRequest` validates the raw query parameters
//! - `MonthRange` derives the inclusive UTC bounds of the month
//! - `ReportService` groups the retrieved costs into the five categories

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
