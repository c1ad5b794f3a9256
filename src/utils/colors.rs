/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Remaining/overtime color:
/// complete → green
/// still short → yellow
pub fn color_for_progress(is_complete: bool) -> &'static str {
    if is_complete { GREEN } else { YELLOW }
}

/// Wrap `value` in `color` when colors are enabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Grey out empty placeholders such as "--:--" or "0h 0m".
pub fn colorize_optional(value: &str, enabled: bool) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "0h 0m" {
        paint(value, GREY, enabled)
    } else {
        value.to_string()
    }
}

/// Clock-in rows green, clock-out rows red.
pub fn colorize_in_out(value: &str, is_in: bool, enabled: bool) -> String {
    if is_in {
        paint(value, GREEN, enabled)
    } else {
        paint(value, RED, enabled)
    }
}
