use chrono::{NaiveTime, TimeDelta};
use rpunchlog::config::Config;
use rpunchlog::export::OutputFormat;
use rpunchlog::models::day_config::{DayConfiguration, DayType};
use rpunchlog::utils::time::{parse_clock_time, parse_duration_str};
use std::fs;

mod common;
use common::temp_config;

#[test]
fn test_parse_duration_strings() {
    assert_eq!(parse_duration_str("8h15m").unwrap(), TimeDelta::minutes(495));
    assert_eq!(parse_duration_str(" 8h 15m ").unwrap(), TimeDelta::minutes(495));
    assert_eq!(parse_duration_str("7H").unwrap(), TimeDelta::minutes(420));
    assert_eq!(parse_duration_str("270m").unwrap(), TimeDelta::minutes(270));
    assert!(parse_duration_str("").is_err());
    assert!(parse_duration_str("eight hours").is_err());
    assert!(parse_duration_str("8:15").is_err());
}

#[test]
fn test_parse_clock_time_formats() {
    let t = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
    assert_eq!(parse_clock_time("9:30:00 AM").unwrap(), t(9, 30, 0));
    assert_eq!(parse_clock_time("12:00:00 am").unwrap(), t(0, 0, 0));
    assert_eq!(parse_clock_time("2:05 PM").unwrap(), t(14, 5, 0));
    assert_eq!(parse_clock_time("14:05").unwrap(), t(14, 5, 0));
    assert_eq!(parse_clock_time("14:05:30").unwrap(), t(14, 5, 30));
    assert!(parse_clock_time("soon").is_err());
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_config("cfg_missing");
    let cfg = Config::load(path.as_ref()).unwrap();

    assert_eq!(cfg.default_day_type, DayType::Full);
    assert_eq!(cfg.default_format, OutputFormat::Text);
    assert!(cfg.check().is_empty());

    let full = DayConfiguration::from_config(DayType::Full, &cfg).unwrap();
    assert_eq!(full.target, TimeDelta::minutes(8 * 60 + 15));
    assert_eq!(full.early_leave, Some(TimeDelta::hours(7)));

    let half = DayConfiguration::from_config(DayType::Half, &cfg).unwrap();
    assert_eq!(half.target, TimeDelta::minutes(4 * 60 + 30));
    assert_eq!(half.early_leave, None);
}

#[test]
fn test_partial_file_fills_defaults_and_round_trips() {
    let path = temp_config("cfg_partial");
    fs::write(&path, "default_day_type: half\nhalf_day_target: 4h\n").unwrap();

    let cfg = Config::load(path.as_ref()).unwrap();
    assert_eq!(cfg.default_day_type, DayType::Half);
    assert_eq!(cfg.full_day_target, "8h15m");
    assert!(cfg.color);

    let half = DayConfiguration::from_config(DayType::Half, &cfg).unwrap();
    assert_eq!(half.target, TimeDelta::minutes(240));

    cfg.save(path.as_ref()).unwrap();
    let again = Config::load(path.as_ref()).unwrap();
    assert_eq!(again.half_day_target, "4h");
}

#[test]
fn test_check_reports_bad_values() {
    let cfg = Config {
        full_day_target: "6h".into(),
        early_leave_threshold: "7h".into(),
        half_day_target: "half".into(),
        ..Config::default()
    };
    let problems = cfg.check();
    assert_eq!(problems.len(), 2);
    assert!(problems.iter().any(|p| p.starts_with("half_day_target")));
    assert!(problems.iter().any(|p| p.contains("exceeds full_day_target")));
    assert!(cfg.validate().is_err());
}
