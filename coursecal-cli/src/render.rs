//! Terminal rendering for coursecal types.
//!
//! Extension traits that add colored output to coursecal-core types using
//! owo_colors.

use coursecal_core::RecurringEventDescriptor;
use coursecal_core::diagnostics::Diagnostic;
use coursecal_core::ics::EventSummary;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for RecurringEventDescriptor {
    fn render(&self) -> String {
        let time = format!(
            "{} {}-{}",
            self.byday(),
            self.daily_start.format("%H:%M"),
            self.daily_end.format("%H:%M")
        );
        let mut line = format!("{} {} {}", "+".green(), self.summary.green(), time.dimmed());
        if !self.location.is_empty() {
            line.push_str(&format!(" {}", format!("@ {}", self.location).dimmed()));
        }
        line
    }
}

impl Render for Diagnostic {
    fn render(&self) -> String {
        format!("{} {}: {}", "!".yellow(), self.course, self.warning.to_string().yellow())
    }
}

impl Render for EventSummary {
    fn render(&self) -> String {
        let start = self
            .start
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "(no start)".to_string());
        let tz = self.tzid.as_deref().unwrap_or("floating");
        let rule = self.rrule.as_deref().unwrap_or("(one-off)");

        format!(
            "{}  {} {}\n     {}",
            self.summary.bold(),
            start.dimmed(),
            tz.dimmed(),
            rule.dimmed()
        )
    }
}

pub fn render_skipped(course: &str) -> String {
    format!("{} {}", "-".dimmed(), format!("{} (no meeting time)", course).dimmed())
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
