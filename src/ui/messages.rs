//! Status lines printed by the command handlers (not the report itself).

use ansi_term::Colour;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(&self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn colour(&self) -> Colour {
        match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
        }
    }
}

/// Build one status line; `color = false` gives plain text.
pub fn format_message<T: fmt::Display>(level: Level, msg: T, color: bool) -> String {
    if color {
        format!("{} {}", level.colour().bold().paint(level.icon()), msg)
    } else {
        format!("{} {}", level.icon(), msg)
    }
}

pub fn success<T: fmt::Display>(msg: T, color: bool) {
    println!("{}", format_message(Level::Success, msg, color));
}

pub fn warning<T: fmt::Display>(msg: T, color: bool) {
    println!("{}", format_message(Level::Warning, msg, color));
}

pub fn error<T: fmt::Display>(msg: T, color: bool) {
    eprintln!("{}", format_message(Level::Error, msg, color));
}
