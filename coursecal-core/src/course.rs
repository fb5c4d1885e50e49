//! Course rows as delivered by whatever collected the schedule.

use crate::schedule::split_meeting;

/// One course row, exactly as acquired. Meeting strings are left unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScheduleEntry {
    pub course_name: String,
    /// Opaque link or identifier for the course; becomes the event description.
    pub course_link: String,
    pub instructor: String,
    /// LEC, LAB, SEM, ...
    pub section_type: String,
    pub days_raw: String,
    pub times_raw: String,
    pub location: String,
}

impl RawScheduleEntry {
    /// Build an entry from a combined meeting string like `"MWF: 9:00am - 9:50am"`.
    pub fn with_meeting(
        course_name: impl Into<String>,
        course_link: impl Into<String>,
        instructor: impl Into<String>,
        section_type: impl Into<String>,
        meeting: &str,
        location: impl Into<String>,
    ) -> Self {
        let (days_raw, times_raw) = split_meeting(meeting);
        RawScheduleEntry {
            course_name: course_name.into(),
            course_link: course_link.into(),
            instructor: instructor.into(),
            section_type: section_type.into(),
            days_raw,
            times_raw,
            location: location.into(),
        }
    }
}
