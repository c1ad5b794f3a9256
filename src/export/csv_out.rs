use crate::errors::{AppError, AppResult};
use crate::export::model::breaks_to_rows;
use crate::models::result::CalculationResult;
use csv::WriterBuilder;

/// One CSV row per break, header included even when there are none.
pub fn render_csv(result: &CalculationResult) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(["index", "start", "end", "duration_minutes", "duration"])?;
    for row in breaks_to_rows(result) {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Other(format!("CSV buffer error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Other(e.to_string()))
}
