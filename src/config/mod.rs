use crate::errors::{AppError, AppResult};
use crate::export::OutputFormat;
use crate::models::day_config::DayType;
use crate::utils::path::{app_dir, expand_tilde};
use crate::utils::time::parse_duration_str;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_day_type: DayType,
    #[serde(default = "default_full_day_target")]
    pub full_day_target: String,
    #[serde(default = "default_early_leave_threshold")]
    pub early_leave_threshold: String,
    #[serde(default = "default_half_day_target")]
    pub half_day_target: String,
    #[serde(default)]
    pub default_format: OutputFormat,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_full_day_target() -> String {
    "8h15m".to_string()
}
fn default_early_leave_threshold() -> String {
    "7h".to_string()
}
fn default_half_day_target() -> String {
    "4h30m".to_string()
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_day_type: DayType::Full,
            full_day_target: default_full_day_target(),
            early_leave_threshold: default_early_leave_threshold(),
            half_day_target: default_half_day_target(),
            default_format: OutputFormat::Text,
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        app_dir().join("rpunchlog.conf")
    }

    /// Explicit `--config` path (with ~ expanded) or the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?cfg, "loaded configuration");
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating the parent directory.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Return every problem found in the duration settings (empty = valid).
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let full = parse_duration_str(&self.full_day_target);
        let early = parse_duration_str(&self.early_leave_threshold);
        let half = parse_duration_str(&self.half_day_target);

        for (key, res) in [
            ("full_day_target", &full),
            ("early_leave_threshold", &early),
            ("half_day_target", &half),
        ] {
            if let Err(e) = res {
                problems.push(format!("{key}: {e}"));
            }
        }

        if let (Ok(f), Ok(e)) = (&full, &early)
            && e > f
        {
            problems.push(format!(
                "early_leave_threshold ({}) exceeds full_day_target ({})",
                self.early_leave_threshold, self.full_day_target
            ));
        }

        problems
    }

    /// Like [`Config::check`], but as a single error.
    pub fn validate(&self) -> AppResult<()> {
        let problems = self.check();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::Config(problems.join("; ")))
        }
    }
}
