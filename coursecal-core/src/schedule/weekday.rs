//! Meeting weekdays.

use std::collections::BTreeSet;
use std::fmt;

/// A teaching weekday. Declaration order is the canonical Monday-to-Friday order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Decode a single schedule letter. Thursday is `R` so it does not clash with Tuesday.
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'M' => Some(Weekday::Monday),
            'T' => Some(Weekday::Tuesday),
            'W' => Some(Weekday::Wednesday),
            'R' => Some(Weekday::Thursday),
            'F' => Some(Weekday::Friday),
            _ => None,
        }
    }

    /// Two-letter BYDAY code
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "MO",
            Weekday::Tuesday => "TU",
            Weekday::Wednesday => "WE",
            Weekday::Thursday => "TH",
            Weekday::Friday => "FR",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ics_str())
    }
}

/// A non-empty set of weekdays, always iterated Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdaySet(BTreeSet<Weekday>);

impl WeekdaySet {
    /// Decode a letter run such as `"MWF"` or `"TR"`.
    ///
    /// Characters other than `M`, `T`, `W`, `R`, `F` are ignored. Returns `None`
    /// when nothing recognizable is left.
    pub fn from_letters(s: &str) -> Option<Self> {
        let days: BTreeSet<Weekday> = s.chars().filter_map(Weekday::from_letter).collect();
        Self::from_days(days)
    }

    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Option<Self> {
        let days: BTreeSet<Weekday> = days.into_iter().collect();
        if days.is_empty() { None } else { Some(WeekdaySet(days)) }
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }

    /// Canonically ordered list, as stored on event descriptors.
    pub fn to_vec(&self) -> Vec<Weekday> {
        self.iter().collect()
    }
}
