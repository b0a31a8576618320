pub mod inference;
pub mod vocabulary;

use crate::types::attributes::StartupAttributes;

/// Lexical alignment of free text with a strategic vocabulary, in [0, 1].
pub trait AlignmentScorer {
    fn alignment(&self, text: &str) -> f64;
}

/// Derives a full attribute set from free text.
pub trait AttributeEstimator {
    fn infer(&self, text: &str) -> StartupAttributes;
}
