use crate::models::day_config::HalfType;
use crate::models::punch::PunchTimestamp;
use chrono::{NaiveDateTime, TimeDelta};

/// Progress of worked time against one goal (full target or early-leave threshold).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// `goal - worked`; negative once the goal is passed.
    pub remaining: TimeDelta,
    pub reached: bool,
    /// Clock time at which the goal is reached, only while still short
    /// and clocked in.
    pub projected: Option<NaiveDateTime>,
}

pub fn project(
    goal: TimeDelta,
    worked: TimeDelta,
    now: NaiveDateTime,
    currently_in: bool,
) -> Projection {
    let remaining = goal - worked;
    let reached = remaining <= TimeDelta::zero();

    let projected = if !reached && currently_in {
        now.checked_add_signed(remaining)
    } else {
        None
    };

    Projection {
        remaining,
        reached,
        projected,
    }
}

/// First or second half, from the hour of the first valid punch.
pub fn classify_half(punches: &[PunchTimestamp]) -> Option<HalfType> {
    punches.first().map(|p| HalfType::from_hour(p.hour()))
}
