use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::time::parse_duration_str;
use chrono::TimeDelta;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Day type selected by the user before a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    #[default]
    Full,
    Half,
}

impl DayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Full => "full",
            DayType::Half => "half",
        }
    }

    /// Helper: accept user input such as "FULL", "h", "half-day"
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "full" | "f" | "full-day" => Some(DayType::Full),
            "half" | "h" | "half-day" => Some(DayType::Half),
            _ => None,
        }
    }
}

/// Which half of the day a half-day session covers, decided by the first punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HalfType {
    First,
    Second,
}

impl HalfType {
    /// Before noon is the first half; noon and later is the second.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            HalfType::First
        } else {
            HalfType::Second
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HalfType::First => "first",
            HalfType::Second => "second",
        }
    }
}

/// Target and optional early-leave threshold for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayConfiguration {
    pub day_type: DayType,
    pub target: TimeDelta,
    pub early_leave: Option<TimeDelta>,
}

impl DayConfiguration {
    /// Build the configuration from the user's config file values.
    pub fn from_config(day_type: DayType, cfg: &Config) -> AppResult<Self> {
        match day_type {
            DayType::Full => Ok(Self {
                day_type,
                target: parse_duration_str(&cfg.full_day_target)?,
                early_leave: Some(parse_duration_str(&cfg.early_leave_threshold)?),
            }),
            DayType::Half => Ok(Self {
                day_type,
                target: parse_duration_str(&cfg.half_day_target)?,
                early_leave: None,
            }),
        }
    }

    pub fn is_half_day(&self) -> bool {
        self.day_type == DayType::Half
    }
}
