//! Schedule string parsing.
//!
//! Turns scraped meeting strings such as `"MWF"` and `"9:00am - 9:50am"` into a
//! [`NormalizedSchedule`]. Nothing here knows about calendars.

mod time;
mod weekday;

pub use time::parse_12h;
pub use weekday::{Weekday, WeekdaySet};

use chrono::NaiveTime;

use crate::diagnostics::ParseWarning;

/// Time used for a token that cannot be read.
pub fn fallback_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}

/// Meeting pattern of a course, or the lack of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedSchedule {
    /// Missing or TBA meeting data. No recurrence is possible.
    Unscheduled,
    /// `end` is not validated against `start` and may precede it.
    Scheduled {
        weekdays: WeekdaySet,
        start: NaiveTime,
        end: NaiveTime,
    },
}

/// Result of [`parse`]: the schedule plus anything that had to be guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSchedule {
    pub schedule: NormalizedSchedule,
    pub warnings: Vec<ParseWarning>,
}

impl ParsedSchedule {
    fn unscheduled() -> Self {
        ParsedSchedule {
            schedule: NormalizedSchedule::Unscheduled,
            warnings: Vec::new(),
        }
    }
}

fn is_blank_or_tba(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("TBA")
}

/// Parse a days string and a times string into a schedule.
///
/// Malformed time tokens fall back to [`fallback_time`] and are reported in
/// `warnings`; they never drop the course.
pub fn parse(days_raw: &str, times_raw: &str) -> ParsedSchedule {
    let days = days_raw.trim();
    let times = times_raw.trim();

    if is_blank_or_tba(days) || is_blank_or_tba(times) {
        return ParsedSchedule::unscheduled();
    }

    let Some(weekdays) = WeekdaySet::from_letters(days) else {
        return ParsedSchedule::unscheduled();
    };

    let (start_token, end_token) = match times.split_once('-') {
        Some((start, end)) => (start.trim(), end.trim()),
        None => (times, ""),
    };

    let mut warnings = Vec::new();
    let start = resolve_time(start_token, &mut warnings);
    let end = resolve_time(end_token, &mut warnings);

    ParsedSchedule {
        schedule: NormalizedSchedule::Scheduled {
            weekdays,
            start,
            end,
        },
        warnings,
    }
}

fn resolve_time(token: &str, warnings: &mut Vec<ParseWarning>) -> NaiveTime {
    match parse_12h(token) {
        Some(time) => time,
        None => {
            let fallback = fallback_time();
            tracing::warn!(token, "malformed time token, falling back to 09:00");
            warnings.push(ParseWarning::MalformedTime {
                token: token.to_string(),
                fallback,
            });
            fallback
        }
    }
}

/// Split a combined meeting string such as `"MWF: 9:00am - 9:50am"` into
/// `(days, times)`.
///
/// The first `" - "` in the times collapses to `"-"`. Anything mentioning `TBA`
/// yields two empty strings. Without a `:` the whole string is taken as days
/// and the times are empty.
pub fn split_meeting(combined: &str) -> (String, String) {
    let combined = combined.trim();

    if combined.contains("TBA") {
        return (String::new(), String::new());
    }

    match combined.split_once(':') {
        Some((days, times)) => {
            let times = times.trim();
            let times = match times.split_once(" - ") {
                Some((start, end)) => format!("{}-{}", start.trim(), end.trim()),
                None => times.to_string(),
            };
            (days.trim().to_string(), times)
        }
        None => (combined.to_string(), String::new()),
    }
}
