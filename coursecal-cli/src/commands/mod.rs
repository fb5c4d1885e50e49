pub mod generate;
pub mod init;
pub mod inspect;

use std::path::PathBuf;

use anyhow::Result;
use coursecal_core::config::{TermConfig, validate_tzid};
use coursecal_core::term::parse_date;

/// Term settings given on the command line. They win over the config file.
#[derive(Debug, Default, clap::Args)]
pub struct TermOverrides {
    /// First day of classes (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Last day of classes (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Where to write the calendar ("-" for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Time zone of the class times (e.g. "America/New_York")
    #[arg(long)]
    pub timezone: Option<String>,
}

impl TermOverrides {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.output.is_none() && self.timezone.is_none()
    }

    pub fn apply(self, config: &mut TermConfig) -> Result<()> {
        if let Some(start) = self.start {
            config.term_start = Some(parse_date(&start)?);
        }
        if let Some(end) = self.end {
            config.term_end = Some(parse_date(&end)?);
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(timezone) = self.timezone {
            validate_tzid(&timezone)?;
            config.timezone = timezone;
        }
        Ok(())
    }
}
