use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        init,
        force,
        edit_config,
        editor,
    } = cmd
    {
        let color = cfg.color;

        // ---- INIT CONFIG ----
        if *init {
            if path.exists() && !*force {
                let msg = format!(
                    "Configuration file already exists: {} (use --force to overwrite)",
                    path.display()
                );
                warning(msg, color);
            } else {
                Config::default().save(path)?;
                success(format!("Config file: {}", path.display()), color);
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration is valid", color);
            } else {
                for p in &problems {
                    error(p, color);
                }
                return Err(AppError::Config(format!(
                    "{} problem(s) found in {}",
                    problems.len(),
                    path.display()
                )));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.as_deref(), color)?;
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<&str>, color: bool) -> AppResult<()> {
    // Default editor based on the platform
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(
                format!("Configuration file edited successfully using '{editor_to_use}'"),
                color,
            );
            Ok(())
        }
        _ if editor_to_use != default_editor => {
            warning(
                format!("Editor '{editor_to_use}' not available, falling back to '{default_editor}'"),
                color,
            );
            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(
                        format!(
                            "Configuration file edited successfully using fallback '{default_editor}'"
                        ),
                        color,
                    );
                    Ok(())
                }
                _ => Err(AppError::Config(format!(
                    "failed to edit configuration file using fallback '{}'",
                    default_editor
                ))),
            }
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration file using '{}'",
            editor_to_use
        ))),
    }
}
