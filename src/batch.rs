use crate::error::{IntakeError, Result};
use crate::history::EvaluationHistory;
use crate::scoring::{evaluate_auto, evaluate_manual, ScoringContext};
use crate::types::attributes::AttributeInput;
use crate::types::report::Evaluation;
use serde::Deserialize;
use std::path::Path;
use tracing::{error, info};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchFile {
    #[serde(default, rename = "submission")]
    pub submissions: Vec<Submission>,
}

/// A submission scored from its attributes when present, else from its pitch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Submission {
    pub pitch: Option<String>,
    pub attributes: Option<AttributeInput>,
}

pub fn load_batch(path: &Path) -> Result<BatchFile> {
    if !path.exists() {
        return Err(IntakeError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| IntakeError::ConfigParse(format!("{}: {}", path.display(), e)))
}

pub fn evaluate_submission(
    submission: &Submission,
    fill_missing: bool,
    ctx: &ScoringContext<'_>,
) -> Result<Evaluation> {
    match &submission.attributes {
        Some(input) => {
            let attributes = if fill_missing {
                input.with_defaults()?
            } else {
                input.complete()?
            };
            evaluate_manual(attributes, submission.pitch.as_deref(), ctx)
        }
        None => evaluate_auto(submission.pitch.as_deref().unwrap_or_default(), ctx),
    }
}

/// Evaluates every submission into a fresh session history. The first
/// failing submission aborts the run.
pub fn run_batch(
    batch: &BatchFile,
    fill_missing: bool,
    ctx: &ScoringContext<'_>,
) -> Result<EvaluationHistory> {
    let mut history = EvaluationHistory::new();
    for (index, submission) in batch.submissions.iter().enumerate() {
        if fill_missing {
            if let Some(input) = &submission.attributes {
                let missing = input.missing_fields();
                if !missing.is_empty() {
                    info!(index, missing = ?missing, "filling absent attributes with 0");
                }
            }
        }
        let evaluation = evaluate_submission(submission, fill_missing, ctx).map_err(|e| {
            error!(index, error = %e, "submission could not be evaluated");
            e
        })?;
        history.record(&evaluation);
    }
    Ok(history)
}
