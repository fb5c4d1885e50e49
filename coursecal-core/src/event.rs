//! Recurring class events.
//!
//! One [`RecurringEventDescriptor`] stands for every meeting of one course over
//! the term. Text fields are stored verbatim; the serializer in [`crate::ics`]
//! escapes them.

use chrono::{NaiveDate, NaiveTime};

use crate::course::RawScheduleEntry;
use crate::schedule::{NormalizedSchedule, Weekday};
use crate::term::TermWindow;

/// A weekly recurring event spanning the whole term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringEventDescriptor {
    pub summary: String,
    pub description: String,
    pub location: String,
    /// Fresh per event, never derived from course content
    pub uid: String,
    pub term_start: NaiveDate,
    pub term_end: NaiveDate,
    pub daily_start: NaiveTime,
    pub daily_end: NaiveTime,
    /// Monday-to-Friday order
    pub by_weekday: Vec<Weekday>,
}

impl RecurringEventDescriptor {
    /// Comma-joined BYDAY value, e.g. `MO,WE,FR`.
    pub fn byday(&self) -> String {
        self.by_weekday
            .iter()
            .map(|d| d.as_ics_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Build the term-long event for a course. Unscheduled courses yield `None`.
pub fn build(
    course: &RawScheduleEntry,
    schedule: &NormalizedSchedule,
    term: &TermWindow,
) -> Option<RecurringEventDescriptor> {
    let NormalizedSchedule::Scheduled {
        weekdays,
        start,
        end,
    } = schedule
    else {
        return None;
    };

    Some(RecurringEventDescriptor {
        summary: course.course_name.clone(),
        description: course.course_link.clone(),
        location: course.location.clone(),
        uid: uuid::Uuid::new_v4().to_string(),
        term_start: term.start(),
        term_end: term.end(),
        daily_start: *start,
        daily_end: *end,
        by_weekday: weekdays.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{WeekdaySet, parse};
    use crate::term::parse_date;

    fn make_test_course() -> RawScheduleEntry {
        RawScheduleEntry {
            course_name: "CALC 101".to_string(),
            course_link: "http://x/1".to_string(),
            instructor: "N/A".to_string(),
            section_type: "LEC".to_string(),
            days_raw: "MWF".to_string(),
            times_raw: "9:00am - 9:50am".to_string(),
            location: "Rm 5".to_string(),
        }
    }

    fn make_test_term() -> TermWindow {
        let start = parse_date("2025-01-21").unwrap();
        let end = parse_date("2025-05-09").unwrap();
        TermWindow::new(start, end).unwrap()
    }

    #[test]
    fn test_build_unscheduled_is_skipped() {
        let course = make_test_course();
        let built = build(&course, &NormalizedSchedule::Unscheduled, &make_test_term());
        assert!(built.is_none());
    }

    #[test]
    fn test_build_copies_course_fields_verbatim() {
        let mut course = make_test_course();
        course.course_name = "Intro, Part 1; \\ Lab".to_string();
        let schedule = parse(&course.days_raw, &course.times_raw).schedule;

        let event = build(&course, &schedule, &make_test_term()).unwrap();

        assert_eq!(event.summary, "Intro, Part 1; \\ Lab");
        assert_eq!(event.description, "http://x/1");
        assert_eq!(event.location, "Rm 5");
        assert_eq!(event.term_start, NaiveDate::from_ymd_opt(2025, 1, 21).unwrap());
        assert_eq!(event.term_end, NaiveDate::from_ymd_opt(2025, 5, 9).unwrap());
        assert_eq!(event.daily_start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(event.daily_end, NaiveTime::from_hms_opt(9, 50, 0).unwrap());
    }

    #[test]
    fn test_build_orders_weekdays_canonically() {
        let course = make_test_course();
        let schedule = NormalizedSchedule::Scheduled {
            weekdays: WeekdaySet::from_letters("FRTM").unwrap(),
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(8, 50, 0).unwrap(),
        };

        let event = build(&course, &schedule, &make_test_term()).unwrap();

        assert_eq!(event.byday(), "MO,TU,TH,FR");
    }

    #[test]
    fn test_build_uid_is_fresh_per_event() {
        let course = make_test_course();
        let schedule = parse(&course.days_raw, &course.times_raw).schedule;
        let term = make_test_term();

        let a = build(&course, &schedule, &term).unwrap();
        let b = build(&course, &schedule, &term).unwrap();

        assert_ne!(a.uid, b.uid);
        assert!(uuid::Uuid::parse_str(&a.uid).is_ok(), "uid {} is not a UUID", a.uid);
        assert_eq!(
            RecurringEventDescriptor { uid: String::new(), ..a },
            RecurringEventDescriptor { uid: String::new(), ..b }
        );
    }
}
