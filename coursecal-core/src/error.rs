//! Error types for coursecal.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in coursecal operations.
#[derive(Error, Debug)]
pub enum CourseCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Term ends ({end}) before it starts ({start})")]
    InvalidTerm { start: NaiveDate, end: NaiveDate },

    #[error("Unknown time zone '{0}'")]
    UnknownTimezone(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Recurrence error: {0}")]
    Recurrence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for coursecal operations.
pub type CourseCalResult<T> = Result<T, CourseCalError>;
