//! The academic term every course repeats over.

use chrono::NaiveDate;

use crate::error::{CourseCalError, CourseCalResult};

/// Inclusive first and last day of classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TermWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> CourseCalResult<Self> {
        if end < start {
            return Err(CourseCalError::InvalidTerm { start, end });
        }
        Ok(TermWindow { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Parse a YYYY-MM-DD date.
pub fn parse_date(s: &str) -> CourseCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        CourseCalError::Config(format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
    })
}
