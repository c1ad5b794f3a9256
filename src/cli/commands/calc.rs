use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, OutputFormat};
use crate::models::day_config::DayConfiguration;
use crate::ui::render::render_entries;
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Read};

/// Handle the `calc` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Calc {
        file,
        entries,
        day,
        format,
        out,
        force,
        show_entries,
        no_color,
    } = cmd
    {
        let text = read_input(file.as_deref(), entries)?;

        let day_type = day.unwrap_or(cfg.default_day_type);
        let day_cfg = DayConfiguration::from_config(day_type, cfg)?;
        let format = format.unwrap_or(cfg.default_format);
        let color = cfg.color && !*no_color;

        if *show_entries && format != OutputFormat::Text {
            return Err(AppError::UnsupportedFormat(format!(
                "--list only works with text output, not {}",
                format.as_str()
            )));
        }

        let now = clock.now();
        tracing::debug!(%now, day = day_type.as_str(), "running calculation");
        let result = Core::calculate(&text, now, &day_cfg);

        // ---- ENTRIES (text on stdout only) ----
        if *show_entries {
            print!("{}", render_entries(&result.valid_entries, color));
            println!();
        }

        let out_path = out.as_deref().map(expand_tilde);
        ExportLogic::emit(&result, format, out_path.as_deref(), *force, color)?;
    }
    Ok(())
}

/// Inline `--entry` values win, then FILE, then stdin.
fn read_input(file: Option<&str>, entries: &[String]) -> AppResult<String> {
    if !entries.is_empty() {
        return Ok(entries.join("\n"));
    }

    match file {
        Some(path) if path != "-" => Ok(fs::read_to_string(expand_tilde(path))?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
