//! Reading calendars back with the icalendar crate's parser.
//!
//! Used to inspect a written term calendar and to check that what we generate
//! is accepted by a parser other than our own.

use chrono::NaiveDateTime;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{read_calendar, unfold},
};

use crate::error::{CourseCalError, CourseCalResult};

/// The parts of a VEVENT worth showing back to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub uid: String,
    pub summary: String,
    pub location: Option<String>,
    /// Local start of the first occurrence
    pub start: Option<NaiveDateTime>,
    pub tzid: Option<String>,
    pub rrule: Option<String>,
    pub alarms: usize,
}

/// Read every VEVENT of an ICS document, in file order.
pub fn read_events(content: &str) -> CourseCalResult<Vec<EventSummary>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| CourseCalError::IcsParse(e.to_string()))?;

    let events = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(|vevent| {
            let (start, tzid) = match vevent
                .find_prop("DTSTART")
                .and_then(|p| DatePerhapsTime::try_from(p).ok())
            {
                Some(dpt) => split_start(dpt),
                None => (None, None),
            };

            EventSummary {
                uid: vevent
                    .find_prop("UID")
                    .map(|p| p.val.to_string())
                    .unwrap_or_default(),
                summary: vevent
                    .find_prop("SUMMARY")
                    .map(|p| p.val.to_string())
                    .unwrap_or_else(|| "(No title)".to_string()),
                location: vevent.find_prop("LOCATION").map(|p| p.val.to_string()),
                start,
                tzid,
                rrule: vevent.find_prop("RRULE").map(|p| p.val.to_string()),
                alarms: vevent
                    .components
                    .iter()
                    .filter(|c| c.name == "VALARM")
                    .count(),
            }
        })
        .collect();

    Ok(events)
}

fn split_start(dpt: DatePerhapsTime) -> (Option<NaiveDateTime>, Option<String>) {
    match dpt {
        DatePerhapsTime::Date(d) => (d.and_hms_opt(0, 0, 0), None),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => (Some(dt.naive_utc()), Some("UTC".to_string())),
            CalendarDateTime::Floating(naive) => (Some(naive), None),
            CalendarDateTime::WithTimezone { date_time, tzid } => (Some(date_time), Some(tzid)),
        },
    }
}
