use crate::types::{AvailabilityReport, ErrorKind};
use thiserror::Error;

/// Every way a search can end without a summary. The `Display` output is the
/// message handed back to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error("No date provided. Please provide a date.")]
    Missing,

    #[error("The date is in the past. Please select a future date.")]
    PastDate,

    #[error("{0}")]
    InvalidDate(#[from] InvalidDate),

    /// Carries the underlying cause for logging only.
    #[error("An error occurred. Please try again later.")]
    Server(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDate {
    #[error("Incomplete date. Please provide the date in the format YYYY-MM-DD.")]
    Incomplete,

    #[error("Invalid year format. Please provide a valid year (e.g., 2024).")]
    Year,

    #[error("Invalid month format. Please provide a valid month (01-12).")]
    Month,

    #[error("Invalid day format. Please provide a valid day (01-{max}).")]
    Day { max: u32 },

    #[error("Invalid date format. Please provide the date in the format YYYY-MM-DD.")]
    Format,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream answered with HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to decode slots: {0}")]
    Decode(String),

    #[error("Failed to read slots file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FetchError> for AvailabilityError {
    fn from(err: FetchError) -> Self {
        AvailabilityError::Server(err.to_string())
    }
}

impl AvailabilityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AvailabilityError::Missing => ErrorKind::Missing,
            AvailabilityError::PastDate => ErrorKind::PastDate,
            AvailabilityError::InvalidDate(_) => ErrorKind::InvalidDate,
            AvailabilityError::Server(_) => ErrorKind::Server,
        }
    }
}

impl From<&AvailabilityError> for AvailabilityReport {
    fn from(err: &AvailabilityError) -> Self {
        AvailabilityReport {
            message: err.to_string(),
            eighteen_holes_message: None,
            is_valid: false,
            error_type: err.kind(),
        }
    }
}
