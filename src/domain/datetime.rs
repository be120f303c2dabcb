//! Local wall-clock instants in the `YYYY-MM-DD HH:MM` form discounts are
//! stored and exchanged in. There is no timezone: values compare as written.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use super::errors::DomainError;

pub const WALL_CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const MAX_YEAR: i32 = 9999;

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .ok()
        .filter(|d| (1..=MAX_YEAR).contains(&d.year()))
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT).ok()
}

/// Parse a combined `YYYY-MM-DD HH:MM` string, as stored.
///
/// Month and day are 1-based. Out-of-range fields are malformed, never
/// rolled over, and years are limited to four digits.
pub fn parse_wall_clock(s: &str) -> Result<NaiveDateTime, DomainError> {
    let malformed = || DomainError::MalformedDateTime(s.to_string());
    let (date, time) = s.trim().split_once(' ').ok_or_else(malformed)?;
    combine(date, time).map_err(|_| malformed())
}

/// Parse a separate date (`YYYY-MM-DD`) and time (`HH:MM`) as one instant.
/// Each part must stand on its own: a time smuggled into the date field is
/// malformed.
pub fn combine(date: &str, time: &str) -> Result<NaiveDateTime, DomainError> {
    match (parse_date(date), parse_time(time)) {
        (Some(d), Some(t)) => Ok(d.and_time(t)),
        _ => Err(DomainError::MalformedDateTime(format!(
            "{} {}",
            date.trim(),
            time.trim()
        ))),
    }
}

pub fn format_wall_clock(dt: &NaiveDateTime) -> String {
    dt.format(WALL_CLOCK_FORMAT).to_string()
}
