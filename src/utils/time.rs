//! Time utilities: parsing the `--now` override and config duration strings.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)\s*h)?\s*(?:(\d+)\s*m)?$").expect("valid duration regex")
});

/// Parse `8h15m`, `8h 15m`, `7h`, `270m` into a delta.
pub fn parse_duration_str(s: &str) -> AppResult<TimeDelta> {
    let trimmed = s.trim().to_lowercase();
    let caps = DURATION_RE
        .captures(&trimmed)
        .filter(|c| c.get(1).is_some() || c.get(2).is_some())
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))?;

    let field = |i: usize| -> AppResult<i64> {
        caps.get(i)
            .map(|m| m.as_str().parse::<i64>())
            .transpose()
            .map(|v| v.unwrap_or(0))
            .map_err(|_| AppError::InvalidDuration(s.to_string()))
    };

    let hours = field(1)?;
    let minutes = field(2)?;
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .and_then(TimeDelta::try_minutes)
        .ok_or_else(|| AppError::InvalidDuration(s.to_string()))
}

/// Parse a wall-clock time given on the command line.
///
/// Accepts the punch format (`9:30:00 AM`) as well as 24-hour `HH:MM[:SS]`.
pub fn parse_clock_time(s: &str) -> AppResult<NaiveTime> {
    let t = s.trim();
    let upper = t.to_uppercase();
    ["%I:%M:%S %p", "%I:%M:%S%p", "%I:%M %p", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&upper, fmt).ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Pin a parsed clock time to `date`.
pub fn at_date(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
