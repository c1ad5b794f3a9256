use rpunchlog::cli::commands::session::run_loop;
use rpunchlog::core::clock::FixedClock;
use rpunchlog::core::session::{Session, SessionCommand, SessionEvent};
use rpunchlog::models::day_config::DayType;
use std::io::Cursor;

mod common;
use common::{at, full_day, half_day};

fn new_session(day: DayType) -> Session {
    Session::new(
        day,
        full_day(),
        half_day(),
        at(9, 30, 0),
    )
}

#[test]
fn test_command_parsing() {
    assert_eq!(SessionCommand::parse(":calc"), SessionCommand::Calculate);
    assert_eq!(SessionCommand::parse("  :C "), SessionCommand::Calculate);
    assert_eq!(SessionCommand::parse(":day half"), SessionCommand::SetDay(DayType::Half));
    assert_eq!(SessionCommand::parse(":day FULL"), SessionCommand::SetDay(DayType::Full));
    assert_eq!(SessionCommand::parse(":q"), SessionCommand::Quit);
    assert_eq!(
        SessionCommand::parse("9:00:00 AM"),
        SessionCommand::Append("9:00:00 AM".to_string())
    );
    assert!(matches!(SessionCommand::parse(":day tomorrow"), SessionCommand::Unknown(_)));
    assert!(matches!(SessionCommand::parse(":frobnicate"), SessionCommand::Unknown(_)));
}

#[test]
fn test_result_stays_frozen_until_recalculated() {
    let mut s = new_session(DayType::Full);
    s.apply(SessionCommand::Append("9:00:00 AM".into()));

    let first = match s.apply(SessionCommand::Calculate) {
        SessionEvent::Calculated(r) => r,
        other => panic!("unexpected event {other:?}"),
    };
    assert_eq!(first.total_worked_minutes, 30.0);

    // the clock moves on, the shown result does not
    s.tick(at(10, 0, 0));
    assert_eq!(s.clock_sample(), at(10, 0, 0));
    assert_eq!(s.result().unwrap().total_worked_minutes, 30.0);

    s.apply(SessionCommand::Calculate);
    assert_eq!(s.result().unwrap().total_worked_minutes, 60.0);
}

#[test]
fn test_day_switch_and_clear() {
    let mut s = new_session(DayType::Full);
    s.apply(SessionCommand::Append("1:00:00 PM".into()));
    s.apply(SessionCommand::SetDay(DayType::Half));
    s.tick(at(14, 0, 0));
    s.apply(SessionCommand::Calculate);

    let r = s.result().unwrap();
    assert_eq!(r.day_type, DayType::Half);
    assert!(r.early_leave.is_none());
    assert_eq!(r.target_minutes, 270.0);

    assert_eq!(s.apply(SessionCommand::Clear), SessionEvent::Cleared);
    assert!(s.input().is_empty());
    assert!(s.result().is_none());
}

#[test]
fn test_run_loop_reads_until_quit() {
    let mut s = new_session(DayType::Full);
    let clock = FixedClock(at(9, 30, 0));
    let input = Cursor::new("9:00:00 AM\nMISSING\n:calc\n:quit\n9:10:00 AM\n");
    let mut out = Vec::new();

    run_loop(&mut s, &clock, input, &mut out, false).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Total Worked: 0h 30m"));
    assert!(text.contains("Currently clocked in"));
    assert!(text.contains("Est. Completion: 5:15:00 PM"));
    assert!(text.contains("Ignored entries: MISSING"));
    // nothing after :quit is consumed
    assert_eq!(s.input(), "9:00:00 AM\nMISSING");
}

#[test]
fn test_run_loop_show_and_now() {
    let mut s = new_session(DayType::Full);
    let clock = FixedClock(at(13, 5, 9));
    let input = Cursor::new(":show\n10:00:00 AM\n:show\n:now\n:bogus\n");
    let mut out = Vec::new();

    run_loop(&mut s, &clock, input, &mut out, false).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("(empty)"));
    assert!(text.contains("10:00:00 AM"));
    assert!(text.contains("Current time: 1:05:09 PM"));
    assert!(text.contains("Unknown command: :bogus"));
}
