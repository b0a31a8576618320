use crate::types::attributes::StartupAttributes;
use crate::types::scoring::{Disposition, FinalScore, ScoreBreakdown};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    Manual,
    Auto,
}

/// A finished evaluation; `final_score` is always computed from `breakdown`.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub mode: EvaluationMode,
    pub attributes: StartupAttributes,
    pub pitch: Option<String>,
    /// Whether `strategic_fit` includes the pitch's text alignment.
    pub blended: bool,
    pub breakdown: ScoreBreakdown,
    pub final_score: FinalScore,
    pub disposition: Disposition,
}
