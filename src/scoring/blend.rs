use crate::estimators::AlignmentScorer;
use crate::types::scoring::ScoreBreakdown;
use tracing::debug;

pub const STRUCTURED_SHARE: f64 = 0.7;
pub const TEXT_SHARE: f64 = 0.3;

/// Folds the text alignment of `text` into `strategic_fit`.
///
/// Whitespace-only text leaves the breakdown untouched and never reaches the
/// scorer. The returned breakdown invalidates any final score computed from
/// the input one; recompute with `FinalScore::from_breakdown`.
pub fn blend(
    breakdown: ScoreBreakdown,
    text: &str,
    scorer: &dyn AlignmentScorer,
) -> ScoreBreakdown {
    if text.trim().is_empty() {
        return breakdown;
    }
    let alignment = scorer.alignment(text);
    debug!(alignment, "blending text alignment into strategic_fit");
    blend_with(breakdown, alignment)
}

pub fn blend_with(breakdown: ScoreBreakdown, alignment: f64) -> ScoreBreakdown {
    ScoreBreakdown {
        strategic_fit: breakdown.strategic_fit * STRUCTURED_SHARE + alignment * TEXT_SHARE,
        ..breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedScorer {
        value: f64,
        calls: Cell<usize>,
    }

    impl FixedScorer {
        fn new(value: f64) -> Self {
            Self {
                value,
                calls: Cell::new(0),
            }
        }
    }

    impl AlignmentScorer for FixedScorer {
        fn alignment(&self, _text: &str) -> f64 {
            self.calls.set(self.calls.get() + 1);
            self.value
        }
    }

    fn breakdown() -> ScoreBreakdown {
        ScoreBreakdown {
            market_opportunity: 0.2,
            business_viability: 0.5,
            technology_maturity: 0.5,
            team_execution: 0.5,
            strategic_fit: 0.75,
            regulatory_risk: 0.75,
        }
    }

    #[test]
    fn empty_text_is_a_no_op() {
        let scorer = FixedScorer::new(1.0);
        assert_eq!(blend(breakdown(), "", &scorer), breakdown());
        assert_eq!(blend(breakdown(), "  \n\t ", &scorer), breakdown());
        assert_eq!(scorer.calls.get(), 0);
    }

    #[test]
    fn text_overwrites_only_strategic_fit() {
        let scorer = FixedScorer::new(0.25);
        let blended = blend(breakdown(), "bank payments", &scorer);
        assert!((blended.strategic_fit - (0.75 * 0.7 + 0.25 * 0.3)).abs() < 1e-12);
        assert_eq!(blended.market_opportunity, 0.2);
        assert_eq!(blended.regulatory_risk, 0.75);
        assert_eq!(scorer.calls.get(), 1);
    }

    #[test]
    fn blending_twice_moves_the_score_again() {
        let once = blend_with(breakdown(), 0.0);
        let twice = blend_with(once, 0.0);
        assert!(twice.strategic_fit < once.strategic_fit);
    }

    #[test]
    fn alignment_equal_to_fit_is_a_fixed_point() {
        let original = breakdown();
        let blended = blend_with(original, original.strategic_fit);
        assert!((blended.strategic_fit - original.strategic_fit).abs() < 1e-12);
    }
}
