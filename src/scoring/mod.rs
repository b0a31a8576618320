pub mod blend;
pub mod classify;
pub mod normalize;
pub mod weighted;

use crate::error::{IntakeError, Result};
use crate::estimators::{AlignmentScorer, AttributeEstimator};
use crate::types::attributes::StartupAttributes;
use crate::types::report::{Evaluation, EvaluationMode};
use crate::types::scoring::{FinalScore, WeightVector};
use tracing::info;

/// Weights plus the two text estimators used by an evaluation.
pub struct ScoringContext<'a> {
    pub weights: WeightVector,
    pub alignment: &'a dyn AlignmentScorer,
    pub estimator: &'a dyn AttributeEstimator,
}

pub fn evaluate_manual(
    attributes: StartupAttributes,
    pitch: Option<&str>,
    ctx: &ScoringContext<'_>,
) -> Result<Evaluation> {
    evaluate(EvaluationMode::Manual, attributes, pitch, ctx)
}

pub fn evaluate_auto(pitch: &str, ctx: &ScoringContext<'_>) -> Result<Evaluation> {
    if pitch.trim().is_empty() {
        return Err(IntakeError::EmptyPitch);
    }
    let attributes = ctx.estimator.infer(pitch);
    evaluate(EvaluationMode::Auto, attributes, Some(pitch), ctx)
}

fn evaluate(
    mode: EvaluationMode,
    attributes: StartupAttributes,
    pitch: Option<&str>,
    ctx: &ScoringContext<'_>,
) -> Result<Evaluation> {
    let (mut final_score, mut breakdown) = weighted::score(&attributes, &ctx.weights)?;

    let pitch = pitch.map(str::trim).filter(|text| !text.is_empty());
    if let Some(text) = pitch {
        breakdown = blend::blend(breakdown, text, ctx.alignment);
        final_score = FinalScore::from_breakdown(&breakdown, &ctx.weights);
    }

    let disposition = classify::classify(final_score.value());
    info!(
        ?mode,
        %final_score,
        %disposition,
        blended = pitch.is_some(),
        "evaluated submission"
    );

    Ok(Evaluation {
        mode,
        attributes,
        blended: pitch.is_some(),
        pitch: pitch.map(str::to_string),
        breakdown,
        final_score,
        disposition,
    })
}
