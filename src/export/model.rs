// src/export/model.rs

use crate::models::result::CalculationResult;
use crate::utils::formatting::format_duration;
use serde::Serialize;

/// Flat break row for CSV output.
#[derive(Serialize, Clone, Debug)]
pub struct BreakExport {
    pub index: usize,
    pub start: String,
    pub end: String,
    pub duration_minutes: f64,
    pub duration: String,
}

pub(crate) fn breaks_to_rows(result: &CalculationResult) -> Vec<BreakExport> {
    result
        .breaks
        .iter()
        .enumerate()
        .map(|(i, b)| BreakExport {
            index: i + 1,
            start: b.start_time.clone(),
            end: b.end_time.clone(),
            duration_minutes: b.duration_minutes,
            duration: format_duration(b.duration_minutes),
        })
        .collect()
}
