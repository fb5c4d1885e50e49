//! ICS text generation for a term calendar.

use icalendar::{Alarm, Calendar, Component, EventLike, EventStatus, Property, Trigger};

use crate::calendar::TermCalendar;
use crate::event::RecurringEventDescriptor;

pub const PRODID: &str = "-//coursecal//Course Schedule//EN";

/// Appended to every event UID.
pub const UID_DOMAIN: &str = "coursecal";

/// Minutes before each class the reminder fires.
pub const REMINDER_MINUTES: i64 = 15;

/// Render the whole calendar. Events keep their order.
pub fn serialize(calendar: &TermCalendar) -> String {
    let mut cal = Calendar::empty();
    cal.append_property(Property::new("VERSION", "2.0"));
    cal.append_property(Property::new("CALSCALE", "GREGORIAN"));
    cal.append_property(Property::new("METHOD", "PUBLISH"));
    cal.append_property(Property::new("PRODID", PRODID));

    for event in calendar.events() {
        cal.push(build_event(event, calendar.tzid()));
    }

    strip_ics_bloat(&cal.done().to_string())
}

/// Render a single VEVENT block (no VCALENDAR wrapper).
pub fn serialize_event(event: &RecurringEventDescriptor, tzid: &str) -> String {
    strip_ics_bloat(&build_event(event, tzid).to_string())
}

fn build_event(event: &RecurringEventDescriptor, tzid: &str) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@{}", event.uid, UID_DOMAIN));
    ics_event.summary(&text_value(&event.summary));
    ics_event.description(&text_value(&event.description));
    ics_event.location(&text_value(&event.location));

    let start = local_datetime(event, event.daily_start);
    let end = local_datetime(event, event.daily_end);
    add_local_datetime(&mut ics_event, "DTSTART", &start, tzid);
    add_local_datetime(&mut ics_event, "DTEND", &end, tzid);
    ics_event.add_property("RRULE", weekly_rule(event));

    ics_event.sequence(0);
    ics_event.status(EventStatus::Confirmed);
    ics_event.add_property("TRANSP", "OPAQUE");

    let trigger = Trigger::before_start(chrono::Duration::minutes(REMINDER_MINUTES));
    ics_event.alarm(Alarm::display("Reminder", trigger));

    ics_event.done()
}

/// DTSTART/DTEND with a TZID parameter
fn add_local_datetime(ics_event: &mut icalendar::Event, name: &str, value: &str, tzid: &str) {
    let mut prop = Property::new(name, value);
    prop.add_parameter("TZID", tzid);
    ics_event.append_property(prop);
}

/// The icalendar crate escapes `\n` only, so bare CRs become LFs first.
fn text_value(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\r', "\n")
}

/// Clean up ICS output from the icalendar crate
/// - Remove DTSTAMP lines (generation time would make every run differ)
/// - Remove UID lines inside VALARM
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_valarm = false;

    for line in ics.lines() {
        if line.starts_with("DTSTAMP:") {
            continue;
        }

        if line == "BEGIN:VALARM" {
            in_valarm = true;
        } else if line == "END:VALARM" {
            in_valarm = false;
        }

        if in_valarm && line.starts_with("UID:") {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// First day of term at the given time, e.g. `20250121T090000`.
pub(crate) fn local_datetime(event: &RecurringEventDescriptor, time: chrono::NaiveTime) -> String {
    event.term_start.and_time(time).format("%Y%m%dT%H%M%S").to_string()
}

/// `FREQ=WEEKLY;UNTIL=<last day>T235959Z;BYDAY=...`
pub(crate) fn weekly_rule(event: &RecurringEventDescriptor) -> String {
    format!(
        "FREQ=WEEKLY;UNTIL={}T235959Z;BYDAY={}",
        event.term_end.format("%Y%m%d"),
        event.byday()
    )
}
