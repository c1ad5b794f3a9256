pub mod day_config;
pub mod punch;
pub mod punch_kind;
pub mod result;
