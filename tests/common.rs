#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rpunchlog::config::Config;
use rpunchlog::models::day_config::{DayConfiguration, DayType};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpl() -> Command {
    cargo_bin_cmd!("rpunchlog")
}

/// Config path inside the system temp dir that does not exist yet,
/// so the binary runs on built-in defaults.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpunchlog.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpunchlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 16).unwrap()
}

pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    day().and_hms_opt(h, m, s).unwrap()
}

pub const SCENARIO_A: &str = "10:38:59 AM\n1:00:00 PM\n1:21:33 PM\n6:00:00 PM";

/// Built-in full-day settings (8h15m target, 7h early leave).
pub fn full_day() -> DayConfiguration {
    DayConfiguration::from_config(DayType::Full, &Config::default()).unwrap()
}

/// Built-in half-day settings (4h30m target).
pub fn half_day() -> DayConfiguration {
    DayConfiguration::from_config(DayType::Half, &Config::default()).unwrap()
}
