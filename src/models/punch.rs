use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

/// A single line of the pasted punch log, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawLine {
    pub content: String,
    /// 1-based position in the original text (blank lines included).
    pub line_no: Option<usize>,
}

impl RawLine {
    pub fn new(content: impl Into<String>, line_no: Option<usize>) -> Self {
        Self {
            content: content.into(),
            line_no,
        }
    }
}

/// A validated punch time anchored to the evaluation date.
///
/// Only `core::parser` builds these, so every instance comes from a line that
/// matched `H:MM:SS AM|PM` with in-range fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchTimestamp {
    at: NaiveDateTime,
    source: String,
}

impl PunchTimestamp {
    pub(crate) fn new(date: NaiveDate, time: NaiveTime, source: impl Into<String>) -> Self {
        Self {
            at: date.and_time(time),
            source: source.into(),
        }
    }

    /// Full timestamp (evaluation date + parsed clock time).
    pub fn at(&self) -> NaiveDateTime {
        self.at
    }

    /// Trimmed input line this punch was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn hour(&self) -> u32 {
        self.at.hour()
    }
}
