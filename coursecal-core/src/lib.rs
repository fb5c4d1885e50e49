//! Core of coursecal.
//!
//! Turns scraped course schedule rows into one recurring event per course for
//! an academic term, and renders them as an iCalendar file:
//! - `schedule` parses day letters and 12-hour time ranges
//! - `event` and `calendar` build the term's recurring events
//! - `ics` serializes them (and reads written files back)

pub mod calendar;
pub mod config;
pub mod course;
pub mod diagnostics;
pub mod error;
pub mod event;
pub mod ics;
pub mod recurrence;
pub mod schedule;
pub mod term;

pub use calendar::TermCalendar;
pub use course::RawScheduleEntry;
pub use error::{CourseCalError, CourseCalResult};
pub use event::RecurringEventDescriptor;
pub use schedule::NormalizedSchedule;
pub use term::TermWindow;
