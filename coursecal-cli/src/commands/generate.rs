use std::path::Path;

use anyhow::{Context, Result};
use coursecal_core::config::{OutputDestination, TermConfig};
use coursecal_core::TermCalendar;
use coursecal_core::ics;
use coursecal_core::recurrence::occurrences;
use owo_colors::OwoColorize;

use super::TermOverrides;
use crate::input::read_courses;
use crate::render::{Render, pluralize, render_skipped};

pub fn run(input: &Path, config_path: Option<&Path>, overrides: TermOverrides) -> Result<()> {
    let mut config = TermConfig::load(config_path)?;
    overrides.apply(&mut config)?;

    let term = config.term().context(
        "No term configured.\n\
         Set term_start and term_end in the config file, or pass --start and --end",
    )?;
    let tzid = config.tzid()?.to_string();

    let courses = read_courses(input)?;
    let (calendar, diagnostics) = TermCalendar::from_courses(&courses, term, &tzid);
    let content = ics::serialize(&calendar);

    let destination = config.output_destination();
    let report = Report {
        to_stderr: destination == OutputDestination::Stdout,
    };

    for event in calendar.events() {
        let meetings = match occurrences(event, &tzid) {
            Ok(dates) => format!("({} {})", dates.len(), pluralize("meeting", dates.len())),
            Err(e) => {
                tracing::warn!(course = %event.summary, error = %e, "could not expand recurrence");
                "(? meetings)".to_string()
            }
        };
        report.line(&format!("   {} {}", event.render(), meetings.dimmed()));
    }
    for skipped in diagnostics.skipped() {
        report.line(&format!("   {}", render_skipped(skipped)));
    }
    for warning in diagnostics.warnings() {
        report.line(&format!("   {}", warning.render()));
    }

    let count = calendar.events().len();
    match destination {
        OutputDestination::Stdout => print!("{}", content),
        OutputDestination::File(path) => {
            write_calendar(&path, &content)?;
            report.line("");
            report.line(
                &format!(
                    "  Wrote {} {} to {}",
                    count,
                    pluralize("event", count),
                    path.display()
                )
                .green()
                .to_string(),
            );
        }
    }

    Ok(())
}

fn write_calendar(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write calendar to {}", path.display()))
}

/// Progress goes to stderr when the calendar itself is written to stdout.
struct Report {
    to_stderr: bool,
}

impl Report {
    fn line(&self, line: &str) {
        if self.to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_calendar_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spring").join("courses.ics");

        write_calendar(&path, "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("BEGIN:VCALENDAR"));
    }

    #[test]
    fn test_run_writes_calendar_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("courses.json");
        let config = dir.path().join("config.toml");
        let output = dir.path().join("out").join("courses.ics");
        std::fs::write(
            &input,
            r#"[
                {"name": "CALC 101", "link": "http://x/1", "days": "MWF",
                 "times": "9:00am - 9:50am", "location": "Rm 5"},
                {"name": "IDP 399", "days": "TBA", "times": "TBA"}
            ]"#,
        )
        .unwrap();
        std::fs::write(
            &config,
            format!(
                "term_start = \"2025-01-21\"\nterm_end = \"2025-05-09\"\noutput = {:?}\n",
                output.to_string_lossy()
            ),
        )
        .unwrap();

        run(&input, Some(&config), TermOverrides::default()).unwrap();

        let ics = std::fs::read_to_string(&output).unwrap();
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1, "ICS:\n{}", ics);
        assert!(
            ics.contains("RRULE:FREQ=WEEKLY;UNTIL=20250509T235959Z;BYDAY=MO,WE,FR"),
            "ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_run_without_term_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("courses.json");
        let config = dir.path().join("config.toml");
        std::fs::write(&input, "[]").unwrap();
        std::fs::write(&config, "output = \"-\"\n").unwrap();

        let err = run(&input, Some(&config), TermOverrides::default()).unwrap_err();

        assert!(err.to_string().contains("No term configured"), "{}", err);
    }
}
