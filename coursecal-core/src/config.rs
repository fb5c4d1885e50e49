//! Term configuration.
//!
//! Lives at ~/.config/coursecal/config.toml by default. Every key can be
//! overridden with a `COURSECAL_` environment variable (e.g.
//! `COURSECAL_TERM_END=2025-05-09`), and the CLI applies its flags on top.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::calendar::DEFAULT_TZID;
use crate::error::{CourseCalError, CourseCalResult};
use crate::term::TermWindow;

static DEFAULT_OUTPUT: &str = "courses.ics";

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_timezone() -> String {
    DEFAULT_TZID.to_string()
}

/// Where the rendered calendar goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TermConfig {
    /// First day of classes (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_start: Option<NaiveDate>,

    /// Last day of classes (YYYY-MM-DD), inclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_end: Option<NaiveDate>,

    /// `-` writes to stdout. `~` is expanded.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// IANA zone the class times are in
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for TermConfig {
    fn default() -> Self {
        TermConfig {
            term_start: None,
            term_end: None,
            output: default_output(),
            timezone: default_timezone(),
        }
    }
}

impl TermConfig {
    pub fn config_path() -> CourseCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CourseCalError::Config("Could not determine config directory".into()))?
            .join("coursecal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing default file is fine (everything can come from the
    /// environment or flags). A missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> CourseCalResult<Self> {
        Self::load_with_env(path, Environment::with_prefix("COURSECAL"))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> CourseCalResult<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path()?, false),
        };

        if required && !path.exists() {
            return Err(CourseCalError::Config(format!(
                "Config file not found at {}",
                path.display()
            )));
        }

        let config: TermConfig = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(env)
            .build()
            .map_err(|e| CourseCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CourseCalError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The configured term, validated.
    pub fn term(&self) -> CourseCalResult<TermWindow> {
        match (self.term_start, self.term_end) {
            (Some(start), Some(end)) => TermWindow::new(start, end),
            (None, _) => Err(CourseCalError::Config("term_start is not set".into())),
            (_, None) => Err(CourseCalError::Config("term_end is not set".into())),
        }
    }

    /// The configured time zone, checked against the IANA database.
    pub fn tzid(&self) -> CourseCalResult<&str> {
        validate_tzid(&self.timezone)?;
        Ok(&self.timezone)
    }

    pub fn output_destination(&self) -> OutputDestination {
        if self.output.as_os_str() == "-" {
            return OutputDestination::Stdout;
        }

        let full_path_str = shellexpand::tilde(&self.output.to_string_lossy()).into_owned();
        OutputDestination::File(PathBuf::from(full_path_str))
    }

    pub fn save(&self, path: &Path) -> CourseCalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CourseCalError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| CourseCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CourseCalResult<()> {
        let contents = format!(
            "\
# coursecal configuration

# First and last day of classes (both inclusive):
# term_start = \"2025-01-21\"
# term_end = \"2025-05-09\"

# Where the calendar is written (\"-\" for stdout):
# output = \"{}\"

# Time zone of the class times:
# timezone = \"{}\"
",
            DEFAULT_OUTPUT, DEFAULT_TZID
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CourseCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CourseCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

pub fn validate_tzid(tzid: &str) -> CourseCalResult<()> {
    chrono_tz::Tz::from_str(tzid)
        .map(|_| ())
        .map_err(|_| CourseCalError::UnknownTimezone(tzid.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reads_term_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "term_start = \"2025-01-21\"\nterm_end = \"2025-05-09\"\noutput = \"-\"\n",
        )
        .unwrap();

        let config = TermConfig::load(Some(&path)).unwrap();

        let term = config.term().unwrap();
        assert_eq!(term.start(), NaiveDate::from_ymd_opt(2025, 1, 21).unwrap());
        assert_eq!(term.end(), NaiveDate::from_ymd_opt(2025, 5, 9).unwrap());
        assert_eq!(config.output_destination(), OutputDestination::Stdout);
        assert_eq!(config.timezone, DEFAULT_TZID);
    }

    #[test]
    fn test_load_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "term_start = \"2025-01-21\"\nterm_end = \"2025-05-09\"\n").unwrap();

        let mut vars = ::config::Map::new();
        vars.insert("COURSECAL_TERM_END".to_string(), "2025-05-16".to_string());
        vars.insert("COURSECAL_TIMEZONE".to_string(), "America/Chicago".to_string());
        vars.insert("OTHER_TERM_START".to_string(), "2024-09-01".to_string());
        let env = Environment::with_prefix("COURSECAL").source(Some(vars));

        let config = TermConfig::load_with_env(Some(&path), env).unwrap();

        assert_eq!(config.term_start, NaiveDate::from_ymd_opt(2025, 1, 21));
        assert_eq!(config.term_end, NaiveDate::from_ymd_opt(2025, 5, 16));
        assert_eq!(config.timezone, "America/Chicago");
    }

    #[test]
    fn test_load_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TermConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"), "{}", err);
    }

    #[test]
    fn test_default_config_template_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coursecal").join("config.toml");
        TermConfig::create_default_config(&path).unwrap();

        let config = TermConfig::load(Some(&path)).unwrap();

        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.term().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = TermConfig {
            term_start: NaiveDate::from_ymd_opt(2025, 8, 28),
            term_end: NaiveDate::from_ymd_opt(2025, 12, 5),
            output: PathBuf::from("fall.ics"),
            timezone: "America/Chicago".to_string(),
        };

        config.save(&path).unwrap();
        let loaded = TermConfig::load(Some(&path)).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_term_requires_both_dates() {
        let config = TermConfig {
            term_start: NaiveDate::from_ymd_opt(2025, 1, 21),
            ..TermConfig::default()
        };
        let err = config.term().unwrap_err();
        assert!(err.to_string().contains("term_end"), "{}", err);
    }

    #[test]
    fn test_output_destination_expands_tilde() {
        let config = TermConfig {
            output: PathBuf::from("~/courses.ics"),
            ..TermConfig::default()
        };
        match config.output_destination() {
            OutputDestination::File(path) => {
                assert!(!path.to_string_lossy().starts_with('~'), "{}", path.display())
            }
            other => panic!("expected a file destination, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_tzid() {
        assert!(validate_tzid("America/New_York").is_ok());
        assert!(validate_tzid("Europe/Dublin").is_ok());
        assert!(matches!(
            validate_tzid("Eastern"),
            Err(CourseCalError::UnknownTimezone(_))
        ));
    }
}
