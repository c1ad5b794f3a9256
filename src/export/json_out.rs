use crate::errors::AppResult;
use crate::models::result::CalculationResult;

/// The whole result as pretty JSON; absent projections become `null`.
pub fn render_json(result: &CalculationResult) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
