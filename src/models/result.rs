use super::day_config::{DayType, HalfType};
use crate::utils::formatting::{serialize_clock, serialize_clock_opt};
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

/// Gap between a clock-out and the following clock-in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakInfo {
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: f64,
}

/// Full-day only: progress against the lower early-leave threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarlyLeave {
    pub threshold_minutes: f64,
    /// Negative once the threshold is passed.
    pub remaining_minutes: f64,
    pub can_leave_now: bool,
    #[serde(serialize_with = "serialize_clock_opt")]
    pub projected_time: Option<NaiveDateTime>,
}

/// Everything one calculation pass produces. Rebuilt from scratch each time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub day_type: DayType,
    #[serde(serialize_with = "serialize_clock")]
    pub calculated_at: NaiveDateTime,
    pub valid_entries: Vec<String>,
    pub invalid_entries: Vec<String>,
    pub total_worked_minutes: f64,
    pub total_break_minutes: f64,
    pub breaks: Vec<BreakInfo>,
    pub target_minutes: f64,
    /// Negative once the target is exceeded.
    pub remaining_minutes: f64,
    pub is_complete: bool,
    pub is_currently_in: bool,
    #[serde(serialize_with = "serialize_clock_opt")]
    pub completion_time: Option<NaiveDateTime>,
    pub early_leave: Option<EarlyLeave>,
    pub half_type: Option<HalfType>,
}

impl CalculationResult {
    /// Unsigned remaining time, or unsigned overtime once complete.
    pub fn remaining_or_overtime_minutes(&self) -> f64 {
        self.remaining_minutes.abs()
    }

    pub fn valid_count(&self) -> usize {
        self.valid_entries.len()
    }

    pub fn has_invalid_entries(&self) -> bool {
        !self.invalid_entries.is_empty()
    }
}

/// Fractional minutes of a signed delta.
pub fn delta_minutes(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 60_000.0
}
