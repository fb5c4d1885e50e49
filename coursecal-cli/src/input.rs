//! Reading course rows from a JSON export.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use coursecal_core::RawScheduleEntry;
use serde::Deserialize;

/// One row of the JSON input. Meeting data comes either as separate `days`
/// and `times` or as one combined `meeting` string ("MWF: 9:00am - 9:50am").
#[derive(Debug, Deserialize)]
struct CourseRow {
    name: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    instructor: String,
    #[serde(default, rename = "type")]
    section_type: String,
    days: Option<String>,
    times: Option<String>,
    meeting: Option<String>,
    #[serde(default)]
    location: String,
}

impl From<CourseRow> for RawScheduleEntry {
    fn from(row: CourseRow) -> Self {
        match (row.days, row.times, row.meeting) {
            (None, None, Some(meeting)) => RawScheduleEntry::with_meeting(
                row.name,
                row.link,
                row.instructor,
                row.section_type,
                &meeting,
                row.location,
            ),
            (days, times, _) => RawScheduleEntry {
                course_name: row.name,
                course_link: row.link,
                instructor: row.instructor,
                section_type: row.section_type,
                days_raw: days.unwrap_or_default(),
                times_raw: times.unwrap_or_default(),
                location: row.location,
            },
        }
    }
}

pub fn parse_courses(json: &str) -> Result<Vec<RawScheduleEntry>> {
    let rows: Vec<CourseRow> =
        serde_json::from_str(json).context("Course input is not a JSON array of courses")?;
    Ok(rows.into_iter().map(RawScheduleEntry::from).collect())
}

/// Read courses from a file, or from stdin when `path` is `-`.
pub fn read_courses(path: &Path) -> Result<Vec<RawScheduleEntry>> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read courses from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read course file at {}", path.display()))?
    };

    parse_courses(&contents)
        .with_context(|| format!("Failed to parse course file at {}", path.display()))
}
