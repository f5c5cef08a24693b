//! Report error types.

use thiserror::Error;

use costwise_shared::AppError;

/// Errors that can occur while validating a report request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// One of id, year or month was not supplied.
    #[error("Missing required query parameters: id, year and month")]
    MissingParameters,

    /// A parameter is not an integer.
    #[error("Invalid number values for id, year or month")]
    InvalidNumber,

    /// Month outside 1..=12.
    #[error("Month must be between 1 and 12")]
    MonthOutOfRange(i64),

    /// Year outside the supported calendar.
    #[error("Year is out of range")]
    YearOutOfRange(i64),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}
