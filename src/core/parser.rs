//! Timestamp parser: turns raw punch-log lines into validated punches.
//!
//! A line is either a punch (`H:MM:SS AM|PM`, hour 1-12) or it is rejected
//! and echoed back verbatim. Nothing in here can fail.

use crate::models::punch::{PunchTimestamp, RawLine};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

static PUNCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2}):([0-9]{2}):([0-9]{2})\s*(AM|PM)$").expect("valid punch regex")
});

/// Valid/invalid partition of one punch log, both in input order.
#[derive(Debug, Default, Clone)]
pub struct ParsedLog {
    pub valid: Vec<PunchTimestamp>,
    pub invalid: Vec<RawLine>,
}

impl ParsedLog {
    pub fn valid_entries(&self) -> Vec<String> {
        self.valid.iter().map(|p| p.source().to_string()).collect()
    }

    pub fn invalid_entries(&self) -> Vec<String> {
        self.invalid.iter().map(|l| l.content.clone()).collect()
    }
}

/// Whitespace trim that also drops a byte-order mark, which Windows editors
/// put in front of the first line.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Convert a 12-hour clock reading to a time of day.
///
/// 12 AM is midnight, 12 PM stays noon, PM hours 1-11 add 12.
fn to_time_of_day(hour12: u32, minute: u32, second: u32, pm: bool) -> Option<NaiveTime> {
    if !(1..=12).contains(&hour12) || minute > 59 || second > 59 {
        return None;
    }
    let hour = match (hour12, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Parse one line, anchoring the result to `date`.
///
/// Surrounding whitespace (and a byte-order mark) is ignored; anything else that deviates from the
/// accepted format gives `None`.
pub fn parse_line(line: &str, date: NaiveDate) -> Option<PunchTimestamp> {
    let trimmed = trim_line(line);
    let caps = PUNCH_RE.captures(trimmed)?;

    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let second: u32 = caps[3].parse().ok()?;
    let pm = caps[4].eq_ignore_ascii_case("PM");

    let time = to_time_of_day(hour, minute, second, pm)?;
    Some(PunchTimestamp::new(date, time, trimmed))
}

/// Split `text` into lines and partition them. Blank lines are skipped and
/// count as neither valid nor invalid.
pub fn parse_log(text: &str, date: NaiveDate) -> ParsedLog {
    let mut parsed = ParsedLog::default();

    for (idx, line) in text.split('\n').enumerate() {
        let trimmed = trim_line(line);
        if trimmed.is_empty() {
            continue;
        }

        match parse_line(trimmed, date) {
            Some(punch) => parsed.valid.push(punch),
            None => {
                tracing::debug!(line_no = idx + 1, content = trimmed, "ignoring unparsable line");
                parsed.invalid.push(RawLine::new(trimmed, Some(idx + 1)));
            }
        }
    }

    tracing::debug!(
        valid = parsed.valid.len(),
        invalid = parsed.invalid.len(),
        "punch log parsed"
    );
    parsed
}
