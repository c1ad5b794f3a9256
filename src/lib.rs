//! rPunchlog library root.
//! Exposes the CLI parser, the high-level run() function, and the punch-log
//! parser/accountant used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use errors::AppResult;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path, clock: &dyn Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg, clock),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg, clock),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// `--now` pins the clock to today's date at the given time.
fn build_clock(now: Option<&str>) -> AppResult<Box<dyn Clock>> {
    match now {
        Some(t) => {
            let time = utils::time::parse_clock_time(t)?;
            Ok(Box::new(FixedClock(utils::time::at_date(
                utils::time::today(),
                time,
            ))))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg_path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&cfg_path)?;

    // `config` must still work on a broken file so it can be fixed
    if !matches!(cli.command, Commands::Config { .. }) {
        cfg.validate()?;
    }

    let clock = build_clock(cli.now.as_deref())?;
    dispatch(&cli, &cfg, &cfg_path, clock.as_ref())
}
