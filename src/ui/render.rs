//! Human-readable rendering of a calculation result.

use crate::models::day_config::DayType;
use crate::models::punch_kind::PunchKind;
use crate::models::result::CalculationResult;
use crate::utils::colors::{self, CYAN, GREEN, GREY, YELLOW};
use crate::utils::formatting::{format_clock, format_duration, format_overtime};
use crate::utils::table::{Column, Table};
use ansi_term::Style;

fn label(text: &str, color: bool) -> String {
    if color {
        Style::new().bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Multi-section text report, same layout with or without ANSI colors.
pub fn render_text(result: &CalculationResult, color: bool) -> String {
    let mut out = String::new();

    // ---- TOTAL WORKED ----
    out.push_str(&format!(
        "⏱  {} {}\n",
        label("Total Worked:", color),
        format_duration(result.total_worked_minutes)
    ));
    if result.is_currently_in {
        out.push_str(&format!(
            "   {}\n",
            colors::paint("Currently clocked in", GREEN, color)
        ));
    }

    // ---- REMAINING / OVERTIME ----
    let progress_color = colors::color_for_progress(result.is_complete);
    if result.is_complete {
        out.push_str(&format!(
            "✅ {} {}\n",
            label("Overtime:", color),
            colors::paint(
                &format_overtime(result.remaining_or_overtime_minutes()),
                progress_color,
                color
            )
        ));
    } else {
        out.push_str(&format!(
            "⏳ {} {}\n",
            label("Remaining:", color),
            colors::paint(
                &format_duration(result.remaining_or_overtime_minutes()),
                progress_color,
                color
            )
        ));
    }
    out.push_str(&format!(
        "   Target: {}\n",
        format_duration(result.target_minutes)
    ));

    // ---- COMPLETION ----
    if result.is_complete {
        out.push_str(&format!(
            "🏁 {} {}\n",
            label("Status:", color),
            colors::paint("Target reached", GREEN, color)
        ));
    } else {
        let value = match &result.completion_time {
            Some(t) => format_clock(t),
            None => colors::paint("Clock in to estimate", GREY, color),
        };
        out.push_str(&format!("🏁 {} {}\n", label("Est. Completion:", color), value));
    }

    // ---- BREAKS ----
    out.push_str(&format!(
        "\n☕ {} {}\n",
        label("Break Time:", color),
        colors::colorize_optional(&format_duration(result.total_break_minutes), color)
    ));
    if result.breaks.is_empty() {
        out.push_str("   No breaks recorded\n");
    } else {
        let mut table = Table::new(vec![
            Column::new("   Break", 28),
            Column::new("Duration", 8),
        ]);
        for b in &result.breaks {
            table.add_row(vec![
                format!("   {} → {}", b.start_time, b.end_time),
                format_duration(b.duration_minutes),
            ]);
        }
        out.push_str(&table.render());
    }

    // ---- EARLY LEAVE (full day) ----
    if let Some(early) = &result.early_leave {
        out.push_str(&format!(
            "\n🚪 {} threshold {}\n",
            label("Early Leave:", color),
            format_duration(early.threshold_minutes)
        ));
        if early.can_leave_now {
            out.push_str(&format!(
                "   {}\n",
                colors::paint("You can leave now", GREEN, color)
            ));
        } else {
            out.push_str(&format!(
                "   Remaining: {}\n",
                colors::paint(&format_duration(early.remaining_minutes), YELLOW, color)
            ));
            match &early.projected_time {
                Some(t) => out.push_str(&format!("   Can leave at: {}\n", format_clock(t))),
                None => out.push_str("   Clock in to estimate\n"),
            }
        }
    }

    // ---- HALF TYPE (half day) ----
    if result.day_type == DayType::Half
        && let Some(half) = result.half_type
    {
        out.push_str(&format!(
            "\n🌓 {} {} half\n",
            label("Half Day:", color),
            colors::paint(half.as_str(), CYAN, color)
        ));
    }

    // ---- ENTRIES ----
    out.push_str(&format!(
        "\n📋 Valid entries: {}\n",
        result.valid_count()
    ));
    if result.has_invalid_entries() {
        out.push_str(&format!(
            "⚠️  Ignored entries: {}\n",
            colors::paint(&result.invalid_entries.join(", "), YELLOW, color)
        ));
    }

    out
}

/// Numbered list of valid punches with their inferred role.
pub fn render_entries(entries: &[String], color: bool) -> String {
    let mut out = String::new();
    for (i, e) in entries.iter().enumerate() {
        let kind = PunchKind::from_position(i);
        out.push_str(&format!(
            "{:>3}. {:<12} {}\n",
            i + 1,
            e,
            colors::colorize_in_out(kind.as_str(), kind.is_in(), color)
        ));
    }
    out
}
