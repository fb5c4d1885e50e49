//! RRULE expansion for class events.
//!
//! Expands a descriptor's weekly rule into the concrete class meetings of the
//! term, using the same DTSTART and RRULE text the serializer writes.

use chrono::NaiveDateTime;
use rrule::RRuleSet;

use crate::error::{CourseCalError, CourseCalResult};
use crate::event::RecurringEventDescriptor;
use crate::ics::{local_datetime, weekly_rule};

/// Upper bound on expanded meetings (a daily class over a long year).
const MAX_OCCURRENCES: u16 = 366;

/// Build an iCalendar-format DTSTART + RRULE string for the rrule crate parser.
fn build_rrule_string(event: &RecurringEventDescriptor, tzid: &str) -> String {
    format!(
        "DTSTART;TZID={}:{}\nRRULE:{}",
        tzid,
        local_datetime(event, event.daily_start),
        weekly_rule(event)
    )
}

/// Local start time of every meeting of `event`, in chronological order.
pub fn occurrences(
    event: &RecurringEventDescriptor,
    tzid: &str,
) -> CourseCalResult<Vec<NaiveDateTime>> {
    let rrule_str = build_rrule_string(event, tzid);

    let rrule_set: RRuleSet = rrule_str.parse().map_err(|e| {
        CourseCalError::Recurrence(format!(
            "Failed to parse RRULE for '{}': {}",
            event.summary, e
        ))
    })?;

    let result = rrule_set.all(MAX_OCCURRENCES);

    Ok(result.dates.iter().map(|dt| dt.naive_local()).collect())
}
