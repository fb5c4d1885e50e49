//! Non-fatal conditions collected while building a term calendar.
//!
//! Nothing in here aborts processing. Callers decide how loudly to report it.

use std::fmt;

use chrono::NaiveTime;

/// A recoverable problem found while parsing one course's schedule strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A time token could not be read; `fallback` was used instead.
    MalformedTime { token: String, fallback: NaiveTime },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::MalformedTime { token, fallback } => write!(
                f,
                "could not read time \"{}\", using {}",
                token,
                fallback.format("%H:%M")
            ),
        }
    }
}

/// A warning attached to the course it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub course: String,
    pub warning: ParseWarning,
}

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    warnings: Vec<Diagnostic>,
    skipped: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, course: &str, warning: ParseWarning) {
        self.warnings.push(Diagnostic {
            course: course.to_string(),
            warning,
        });
    }

    /// Record a course that produced no event (missing or TBA meeting data).
    pub fn skip(&mut self, course: &str) {
        self.skipped.push(course.to_string());
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}
