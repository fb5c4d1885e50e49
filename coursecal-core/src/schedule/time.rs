//! 12-hour clock tokens ("9:00am", "1:50 PM").

use chrono::NaiveTime;

/// Parse a 12-hour clock token into a 24-hour time of day.
///
/// Accepts `H:MM` or `HH:MM` followed by optional whitespace and `am`/`pm`
/// in any case. 12am is midnight, 12pm is noon.
pub fn parse_12h(token: &str) -> Option<NaiveTime> {
    let token = token.trim();
    let lower = token.to_ascii_lowercase();

    let (clock, pm) = if let Some(rest) = lower.strip_suffix("am") {
        (rest, false)
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest, true)
    } else {
        return None;
    };

    let (hour, minute) = clock.trim_end().split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().all(|b| b.is_ascii_digit()) || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}
