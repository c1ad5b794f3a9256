use crate::export::OutputFormat;
use crate::models::day_config::DayType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPunchlog
/// CLI application to turn a punch log into worked hours and a clock-out estimate
#[derive(Parser)]
#[command(
    name = "rpunchlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Paste your punch log: get worked hours, breaks and an estimated clock-out time",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Pin the current time (e.g. "9:30:00 AM" or "14:05")
    #[arg(global = true, long = "now", value_name = "TIME")]
    pub now: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate worked hours from a punch log
    Calc {
        /// Punch log file, one time per line ("-" or omitted = stdin)
        file: Option<String>,

        /// Punch time given inline (repeatable), instead of a file
        #[arg(long = "entry", short = 'e', value_name = "TIME", conflicts_with = "file")]
        entries: Vec<String>,

        #[arg(long = "day", short = 'd', value_enum, help = "Day type: full (8h15m) or half (4h30m)")]
        day: Option<DayType>,

        #[arg(long = "format", value_enum, help = "Output format: text, json, csv")]
        format: Option<OutputFormat>,

        #[arg(long = "out", short = 'o', value_name = "FILE", help = "Write the result to a file")]
        out: Option<String>,

        #[arg(long = "force", short = 'f', requires = "out", help = "Overwrite --out if it exists")]
        force: bool,

        #[arg(
            long = "list",
            conflicts_with = "out",
            help = "Also list the valid entries with their in/out role (text output only)"
        )]
        show_entries: bool,

        #[arg(long = "no-color", help = "Disable ANSI colors")]
        no_color: bool,
    },

    /// Interactive session: paste lines, then type :calc
    Session {
        #[arg(long = "day", short = 'd', value_enum, help = "Initial day type: full or half")]
        day: Option<DayType>,

        #[arg(long = "no-color", help = "Disable ANSI colors")]
        no_color: bool,
    },

    /// Manage the configuration file (view, check, create or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values")]
        check: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long = "force", requires = "init", help = "Overwrite an existing file with --init")]
        force: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
