use rpunchlog::core::parser::{parse_line, parse_log};

mod common;
use common::day;

#[test]
fn test_accepts_well_formed_lines() {
    for line in [
        "1:00:00 AM",
        "12:59:59 pm",
        "  9:05:07 Pm  ",
        "9:05:07AM",
        "09:00:00 AM",
        "10:00:00\tam",
        "11:59:59   PM",
    ] {
        assert!(parse_line(line, day()).is_some(), "expected '{line}' to parse");
    }
}

#[test]
fn test_rejects_out_of_range_and_malformed_lines() {
    for line in [
        "0:00:00 AM",
        "00:30:00 PM",
        "13:00:00 PM",
        "9:60:00 AM",
        "9:00:60 AM",
        "9:00:00",
        "9:00 AM",
        "9:0:00 AM",
        "123:00:00 AM",
        "9:00:00 AM extra",
        "IN 9:00:00 AM",
        "9:00:00 XM",
        "MISSING",
        "",
    ] {
        assert!(parse_line(line, day()).is_none(), "expected '{line}' to be rejected");
    }
}

#[test]
fn test_twelve_hour_conversion() {
    let midnight = parse_line("12:00:00 AM", day()).unwrap();
    assert_eq!(midnight.hour(), 0);

    let noon = parse_line("12:00:00 PM", day()).unwrap();
    assert_eq!(noon.hour(), 12);

    let afternoon = parse_line("1:21:33 PM", day()).unwrap();
    assert_eq!(afternoon.at(), day().and_hms_opt(13, 21, 33).unwrap());

    let morning = parse_line("11:05:09 am", day()).unwrap();
    assert_eq!(morning.hour(), 11);
}

#[test]
fn test_punch_is_anchored_to_given_date_and_keeps_trimmed_source() {
    let p = parse_line("   10:38:59 AM ", day()).unwrap();
    assert_eq!(p.at().date(), day());
    assert_eq!(p.source(), "10:38:59 AM");
    assert_eq!(p.display(), "10:38:59 AM");
}

#[test]
fn test_parse_log_partitions_in_order_and_skips_blank_lines() {
    let text = "10:38:59 AM\n\n  \nMISSING\r\n1:00:00 PM\r\ngarbage\n1:21:33 PM\n";
    let parsed = parse_log(text, day());

    assert_eq!(
        parsed.valid_entries(),
        vec!["10:38:59 AM", "1:00:00 PM", "1:21:33 PM"]
    );
    assert_eq!(parsed.invalid_entries(), vec!["MISSING", "garbage"]);

    // line numbers count blank lines too
    assert_eq!(parsed.invalid[0].line_no, Some(4));
    assert_eq!(parsed.invalid[1].line_no, Some(6));
}

#[test]
fn test_parse_log_is_idempotent() {
    let text = "9:00:00 AM\nnope\n12:30:00 PM";
    let a = parse_log(text, day());
    let b = parse_log(text, day());
    assert_eq!(a.valid, b.valid);
    assert_eq!(a.invalid, b.invalid);
}

#[test]
fn test_parse_log_empty_input() {
    let parsed = parse_log("", day());
    assert!(parsed.valid.is_empty());
    assert!(parsed.invalid.is_empty());
}

#[test]
fn test_byte_order_mark_is_trimmed() {
    assert!(parse_line("\u{FEFF}10:38:59 AM", day()).is_some());

    let parsed = parse_log("\u{FEFF}10:38:59 AM\n1:00:00 PM\n\u{FEFF}\n", day());
    assert_eq!(parsed.valid_entries(), vec!["10:38:59 AM", "1:00:00 PM"]);
    assert!(parsed.invalid.is_empty());
}
