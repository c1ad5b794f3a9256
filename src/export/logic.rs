// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::OutputFormat;
use crate::export::csv_out::render_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_out::render_json;
use crate::models::result::CalculationResult;
use crate::ui::render::render_text;
use std::fs;
use std::path::Path;

/// High-level output logic for one calculation result.
pub struct ExportLogic;

impl ExportLogic {
    /// Render `result` in `format`. Colors only apply to `text`.
    pub fn render(result: &CalculationResult, format: OutputFormat, color: bool) -> AppResult<String> {
        match format {
            OutputFormat::Text => Ok(render_text(result, color)),
            OutputFormat::Json => render_json(result),
            OutputFormat::Csv => render_csv(result),
        }
    }

    /// Print to stdout, or write to `out` (never colored) when given.
    pub fn emit(
        result: &CalculationResult,
        format: OutputFormat,
        out: Option<&Path>,
        force: bool,
        color: bool,
    ) -> AppResult<()> {
        match out {
            None => {
                let rendered = Self::render(result, format, color)?;
                print!("{rendered}");
                if !rendered.ends_with('\n') {
                    println!();
                }
            }
            Some(path) => {
                ensure_writable(path, force)?;
                let rendered = Self::render(result, format, false)?;
                fs::write(path, rendered)?;
                tracing::info!(path = %path.display(), format = format.as_str(), "result written");
            }
        }
        Ok(())
    }
}
