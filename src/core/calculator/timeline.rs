use crate::models::punch::PunchTimestamp;
use crate::models::punch_kind::PunchKind;
use chrono::{NaiveDateTime, TimeDelta};

/// Ordered (start, end) pair. `end` may precede `start` for punches that
/// cross midnight; the duration is then negative and is kept that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: &PunchTimestamp, end: &PunchTimestamp) -> Self {
        Self {
            start: start.at(),
            end: end.at(),
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

#[derive(Debug, Clone)]
pub struct Timeline {
    /// Gaps from each clock-out to the next clock-in, in input order.
    pub breaks: Vec<Interval>,
    /// Trailing clock-in without a matching clock-out.
    pub open_in: Option<NaiveDateTime>,
    /// Closed sessions plus the open span up to `now`.
    pub total_worked: TimeDelta,
    pub total_break: TimeDelta,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            breaks: Vec::new(),
            open_in: None,
            total_worked: TimeDelta::zero(),
            total_break: TimeDelta::zero(),
        }
    }
}

impl Timeline {
    pub fn is_currently_in(&self) -> bool {
        self.open_in.is_some()
    }
}

/// Pair punches by position (no re-sorting) and accumulate work and break time.
pub fn build_timeline(punches: &[PunchTimestamp], now: NaiveDateTime) -> Timeline {
    if punches.is_empty() {
        return Timeline::default();
    }

    let mut timeline = Timeline::default();

    // -----------------------------
    // Work sessions
    // -----------------------------
    for chunk in punches.chunks(2) {
        match chunk {
            [in_p, out_p] => {
                let session = Interval::new(in_p, out_p);
                timeline.total_worked = timeline.total_worked + session.duration();
            }
            [last_in] => timeline.open_in = Some(last_in.at()),
            _ => {}
        }
    }

    // -----------------------------
    // Breaks: OUT at i, next IN at i + 1
    // -----------------------------
    for (i, pair) in punches.windows(2).enumerate() {
        if PunchKind::from_position(i).is_out() {
            let gap = Interval::new(&pair[0], &pair[1]);
            timeline.total_break = timeline.total_break + gap.duration();
            timeline.breaks.push(gap);
        }
    }

    if let Some(last_in) = timeline.open_in {
        timeline.total_worked = timeline.total_worked + (now - last_in);
    }

    timeline
}
