//! A term's worth of class events, ready for serialization.

use crate::course::RawScheduleEntry;
use crate::diagnostics::Diagnostics;
use crate::event::{RecurringEventDescriptor, build};
use crate::schedule::parse;
use crate::term::TermWindow;

/// Zone used for DTSTART/DTEND when none is configured.
pub const DEFAULT_TZID: &str = "America/New_York";

/// Ordered class events sharing one term window and one time zone.
#[derive(Debug, Clone)]
pub struct TermCalendar {
    term: TermWindow,
    tzid: String,
    events: Vec<RecurringEventDescriptor>,
}

impl TermCalendar {
    pub fn new(term: TermWindow, tzid: impl Into<String>) -> Self {
        TermCalendar {
            term,
            tzid: tzid.into(),
            events: Vec::new(),
        }
    }

    /// Parse and build every course in input order.
    ///
    /// Unscheduled courses are left out and listed in the returned diagnostics,
    /// next to any time tokens that had to fall back.
    pub fn from_courses<'a>(
        courses: impl IntoIterator<Item = &'a RawScheduleEntry>,
        term: TermWindow,
        tzid: impl Into<String>,
    ) -> (Self, Diagnostics) {
        let mut calendar = TermCalendar::new(term, tzid);
        let mut diagnostics = Diagnostics::new();

        for course in courses {
            let parsed = parse(&course.days_raw, &course.times_raw);
            for warning in parsed.warnings {
                diagnostics.warn(&course.course_name, warning);
            }

            match build(course, &parsed.schedule, &calendar.term) {
                Some(event) => {
                    tracing::debug!(
                        course = %course.course_name,
                        byday = %event.byday(),
                        "generated event"
                    );
                    calendar.push(event);
                }
                None => {
                    tracing::debug!(course = %course.course_name, "no meeting time, skipping");
                    diagnostics.skip(&course.course_name);
                }
            }
        }

        (calendar, diagnostics)
    }

    pub fn push(&mut self, event: RecurringEventDescriptor) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[RecurringEventDescriptor] {
        &self.events
    }

    pub fn tzid(&self) -> &str {
        &self.tzid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::parse_date;

    fn course(name: &str, days: &str, times: &str) -> RawScheduleEntry {
        RawScheduleEntry {
            course_name: name.to_string(),
            course_link: format!("http://x/{}", name),
            instructor: "N/A".to_string(),
            section_type: "LEC".to_string(),
            days_raw: days.to_string(),
            times_raw: times.to_string(),
            location: "Rm 5".to_string(),
        }
    }

    fn make_test_term(start: &str, end: &str) -> TermWindow {
        TermWindow::new(parse_date(start).unwrap(), parse_date(end).unwrap()).unwrap()
    }

    #[test]
    fn test_from_courses_skips_unscheduled_and_keeps_order() {
        let courses = vec![
            course("A", "MWF", "9:00am - 9:50am"),
            course("B", "TBA", "TBA"),
            course("C", "TR", "1:30pm - 2:45pm"),
        ];
        let term = make_test_term("2025-01-21", "2025-05-09");

        let (calendar, diagnostics) = TermCalendar::from_courses(&courses, term, DEFAULT_TZID);

        let names: Vec<_> = calendar.events().iter().map(|e| e.summary.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
        assert_eq!(diagnostics.skipped(), ["B"]);
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn test_from_courses_attaches_warnings_to_course() {
        let courses = vec![course("LATE", "M", "noon - 1:00pm")];
        let term = make_test_term("2025-01-21", "2025-05-09");

        let (calendar, diagnostics) = TermCalendar::from_courses(&courses, term, DEFAULT_TZID);

        assert_eq!(calendar.events().len(), 1);
        assert_eq!(diagnostics.warnings().len(), 1);
        assert_eq!(diagnostics.warnings()[0].course, "LATE");
    }

    #[test]
    fn test_from_courses_all_events_share_term() {
        let courses = vec![
            course("A", "M", "8:00am - 8:50am"),
            course("B", "F", "4:00pm - 5:15pm"),
        ];
        let term = make_test_term("2025-08-28", "2025-12-05");

        let (calendar, _) = TermCalendar::from_courses(&courses, term, "America/Chicago");

        assert_eq!(calendar.tzid(), "America/Chicago");
        for event in calendar.events() {
            assert_eq!(event.term_start, term.start());
            assert_eq!(event.term_end, term.end());
        }
    }
}
