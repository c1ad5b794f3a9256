//! Interactive session state: one input text, one clock sample, one result.
//!
//! The clock sample is refreshed on every `tick`, but the result is only
//! recomputed on an explicit `Calculate`. Between two calculations the
//! projections shown to the user stay frozen at the last calculation time.

use crate::core::logic::Core;
use crate::models::day_config::{DayConfiguration, DayType};
use crate::models::result::CalculationResult;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// A punch-log line to add to the input text.
    Append(String),
    Calculate,
    Clear,
    SetDay(DayType),
    ShowNow,
    ShowInput,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    /// Lines starting with `:` are commands, everything else is input.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(cmd) = trimmed.strip_prefix(':') else {
            return SessionCommand::Append(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let mut parts = cmd.split_whitespace();
        match parts.next().map(|s| s.to_lowercase()).as_deref() {
            Some("calc") | Some("c") => SessionCommand::Calculate,
            Some("clear") => SessionCommand::Clear,
            Some("now") => SessionCommand::ShowNow,
            Some("show") => SessionCommand::ShowInput,
            Some("help") | Some("h") => SessionCommand::Help,
            Some("quit") | Some("q") | Some("exit") => SessionCommand::Quit,
            Some("day") => match parts.next().and_then(DayType::from_code) {
                Some(d) => SessionCommand::SetDay(d),
                None => SessionCommand::Unknown(trimmed.to_string()),
            },
            _ => SessionCommand::Unknown(trimmed.to_string()),
        }
    }
}

/// What a command did, for the front end to render.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Appended,
    Calculated(CalculationResult),
    Cleared,
    DayChanged(DayType),
    Now(NaiveDateTime),
    Input(String),
    Help,
    Quit,
    Unknown(String),
}

#[derive(Debug, Clone)]
pub struct Session {
    input: String,
    clock_sample: NaiveDateTime,
    day_type: DayType,
    full_day: DayConfiguration,
    half_day: DayConfiguration,
    result: Option<CalculationResult>,
}

impl Session {
    pub fn new(
        day_type: DayType,
        full_day: DayConfiguration,
        half_day: DayConfiguration,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            input: String::new(),
            clock_sample: now,
            day_type,
            full_day,
            half_day,
            result: None,
        }
    }

    /// Refresh the clock sample. Never touches the last result.
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.clock_sample = now;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn clock_sample(&self) -> NaiveDateTime {
        self.clock_sample
    }

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    fn day_config(&self) -> &DayConfiguration {
        match self.day_type {
            DayType::Full => &self.full_day,
            DayType::Half => &self.half_day,
        }
    }

    pub fn apply(&mut self, cmd: SessionCommand) -> SessionEvent {
        match cmd {
            SessionCommand::Append(line) => {
                if !self.input.is_empty() {
                    self.input.push('\n');
                }
                self.input.push_str(&line);
                SessionEvent::Appended
            }
            SessionCommand::Calculate => {
                let result = Core::calculate(&self.input, self.clock_sample, self.day_config());
                self.result = Some(result.clone());
                SessionEvent::Calculated(result)
            }
            SessionCommand::Clear => {
                self.input.clear();
                self.result = None;
                SessionEvent::Cleared
            }
            SessionCommand::SetDay(day) => {
                self.day_type = day;
                SessionEvent::DayChanged(day)
            }
            SessionCommand::ShowNow => SessionEvent::Now(self.clock_sample),
            SessionCommand::ShowInput => SessionEvent::Input(self.input.clone()),
            SessionCommand::Help => SessionEvent::Help,
            SessionCommand::Quit => SessionEvent::Quit,
            SessionCommand::Unknown(s) => SessionEvent::Unknown(s),
        }
    }
}
