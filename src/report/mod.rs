pub mod json;
pub mod md;

use crate::error::IntakeError;
use crate::history::EvaluationHistory;
use crate::types::report::Evaluation;
use crate::types::scoring::WeightVector;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_evaluation(
    evaluation: &Evaluation,
    format: OutputFormat,
) -> Result<String, IntakeError> {
    match format {
        OutputFormat::Json => json::evaluation_to_json(evaluation).map_err(IntakeError::Json),
        OutputFormat::Md => Ok(md::evaluation_to_markdown(evaluation)),
    }
}

pub fn render_dashboard(
    history: &EvaluationHistory,
    format: OutputFormat,
) -> Result<String, IntakeError> {
    match format {
        OutputFormat::Json => json::dashboard_to_json(history).map_err(IntakeError::Json),
        OutputFormat::Md => Ok(md::dashboard_to_markdown(history)),
    }
}

pub fn render_weights(weights: &WeightVector, format: OutputFormat) -> Result<String, IntakeError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(weights).map_err(IntakeError::Json),
        OutputFormat::Md => Ok(md::weights_to_markdown(weights)),
    }
}
