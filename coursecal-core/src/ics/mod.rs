//! ICS generation and read-back.
//!
//! This module writes term calendars according to RFC 5545 and reads produced
//! files back for inspection.

mod generate;
mod parse;

pub use generate::{PRODID, REMINDER_MINUTES, UID_DOMAIN, serialize, serialize_event};
pub(crate) use generate::{local_datetime, weekly_rule};
pub use parse::{EventSummary, read_events};
