//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDateTime;
use serde::Serializer;

/// Render a minute count as `Xh Ym`, always unsigned.
///
/// Hours are floored and the leftover minutes rounded, both on the absolute
/// value: `125.0` → `2h 5m`, `-125.0` → `2h 5m`.
pub fn format_duration(total_minutes: f64) -> String {
    let abs_m = total_minutes.abs();
    let hours = (abs_m / 60.0).floor() as i64;
    let minutes = (abs_m % 60.0).round() as i64;
    format!("{}h {}m", hours, minutes)
}

/// Same as [`format_duration`] with a `+` in front, used for overtime.
pub fn format_overtime(total_minutes: f64) -> String {
    format!("+{}", format_duration(total_minutes))
}

/// en-US 12-hour clock: `1:00:00 PM`, `10:38:59 AM`.
pub fn format_clock(dt: &NaiveDateTime) -> String {
    dt.format("%-I:%M:%S %p").to_string()
}

pub fn serialize_clock<S>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&format_clock(dt))
}

pub fn serialize_clock_opt<S>(dt: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(d) => s.serialize_some(&format_clock(d)),
        None => s.serialize_none(),
    }
}
