use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::session::{Session, SessionCommand, SessionEvent};
use crate::errors::AppResult;
use crate::models::day_config::{DayConfiguration, DayType};
use crate::ui::messages::{Level, format_message};
use crate::ui::render::render_text;
use crate::utils::formatting::format_clock;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Paste punch times one per line, then:
  :calc          calculate with the current time
  :now           show the current time sample
  :day full|half switch day type
  :show          show the punch log entered so far
  :clear         start over
  :quit          exit (Ctrl-D works too)";

/// Handle the `session` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Session { day, no_color } = cmd {
        let color = cfg.color && !*no_color;
        let mut session = Session::new(
            day.unwrap_or(cfg.default_day_type),
            DayConfiguration::from_config(DayType::Full, cfg)?,
            DayConfiguration::from_config(DayType::Half, cfg)?,
            clock.now(),
        );

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_loop(&mut session, clock, stdin.lock(), &mut stdout, color)?;
    }
    Ok(())
}

/// Read-eval loop. The clock sample is refreshed before every command.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut Session,
    clock: &dyn Clock,
    input: R,
    out: &mut W,
    color: bool,
) -> AppResult<()> {
    writeln!(
        out,
        "🕘 Punch log session ({} day). Type :help for commands.",
        session.day_type().as_str()
    )?;

    for line in input.lines() {
        let line = line?;
        session.tick(clock.now());

        match session.apply(SessionCommand::parse(&line)) {
            SessionEvent::Appended => {}
            SessionEvent::Calculated(result) => {
                writeln!(out, "\n{}", render_text(&result, color))?;
            }
            SessionEvent::Cleared => {
                writeln!(out, "{}", format_message(Level::Info, "Input cleared", color))?;
            }
            SessionEvent::DayChanged(d) => {
                writeln!(
                    out,
                    "{}",
                    format_message(Level::Success, format!("Day type: {}", d.as_str()), color)
                )?;
            }
            SessionEvent::Now(now) => writeln!(out, "Current time: {}", format_clock(&now))?,
            SessionEvent::Input(text) => {
                if text.trim().is_empty() {
                    writeln!(out, "(empty)")?;
                } else {
                    writeln!(out, "{text}")?;
                }
            }
            SessionEvent::Help => writeln!(out, "{HELP}")?,
            SessionEvent::Quit => break,
            SessionEvent::Unknown(s) => {
                writeln!(
                    out,
                    "{}",
                    format_message(Level::Warning, format!("Unknown command: {s}"), color)
                )?;
            }
        }
        out.flush()?;
    }

    tracing::debug!("session ended");
    Ok(())
}
