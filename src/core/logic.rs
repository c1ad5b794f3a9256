use crate::core::calculator::{target, timeline};
use crate::core::parser::{self, ParsedLog};
use crate::models::day_config::DayConfiguration;
use crate::models::result::{BreakInfo, CalculationResult, EarlyLeave, delta_minutes};
use crate::utils::formatting::format_clock;
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Parse `text` and account for it at `now`. Punches are anchored to
    /// `now`'s calendar date.
    pub fn calculate(text: &str, now: NaiveDateTime, day: &DayConfiguration) -> CalculationResult {
        let parsed = parser::parse_log(text, now.date());
        Self::calculate_parsed(&parsed, now, day)
    }

    /// Time accounting over an already-partitioned log.
    pub fn calculate_parsed(
        parsed: &ParsedLog,
        now: NaiveDateTime,
        day: &DayConfiguration,
    ) -> CalculationResult {
        let timeline = timeline::build_timeline(&parsed.valid, now);
        let currently_in = timeline.is_currently_in();

        let completion = target::project(day.target, timeline.total_worked, now, currently_in);

        let early_leave = day.early_leave.map(|threshold| {
            let p = target::project(threshold, timeline.total_worked, now, currently_in);
            EarlyLeave {
                threshold_minutes: delta_minutes(threshold),
                remaining_minutes: delta_minutes(p.remaining),
                can_leave_now: p.reached,
                projected_time: p.projected,
            }
        });

        let half_type = if day.is_half_day() {
            target::classify_half(&parsed.valid)
        } else {
            None
        };

        let breaks = timeline
            .breaks
            .iter()
            .map(|b| BreakInfo {
                start_time: format_clock(&b.start),
                end_time: format_clock(&b.end),
                duration_minutes: delta_minutes(b.duration()),
            })
            .collect();

        let result = CalculationResult {
            day_type: day.day_type,
            calculated_at: now,
            valid_entries: parsed.valid_entries(),
            invalid_entries: parsed.invalid_entries(),
            total_worked_minutes: delta_minutes(timeline.total_worked),
            total_break_minutes: delta_minutes(timeline.total_break),
            breaks,
            target_minutes: delta_minutes(day.target),
            remaining_minutes: delta_minutes(completion.remaining),
            is_complete: completion.reached,
            is_currently_in: currently_in,
            completion_time: completion.projected,
            early_leave,
            half_type,
        };

        tracing::debug!(
            worked = result.total_worked_minutes,
            remaining = result.remaining_minutes,
            breaks = result.breaks.len(),
            currently_in,
            "calculation done"
        );
        result
    }
}
