use serde::{Deserialize, Serialize};
use std::fmt;

pub const SUB_SCORE_KEYS: [&str; 6] = [
    "market_opportunity",
    "business_viability",
    "technology_maturity",
    "team_execution",
    "strategic_fit",
    "regulatory_risk",
];

/// Six sub-scores of one evaluation, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub market_opportunity: f64,
    pub business_viability: f64,
    pub technology_maturity: f64,
    pub team_execution: f64,
    pub strategic_fit: f64,
    pub regulatory_risk: f64,
}

impl ScoreBreakdown {
    /// Values in `SUB_SCORE_KEYS` order.
    pub fn values(&self) -> [f64; 6] {
        [
            self.market_opportunity,
            self.business_viability,
            self.technology_maturity,
            self.team_execution,
            self.strategic_fit,
            self.regulatory_risk,
        ]
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> {
        SUB_SCORE_KEYS.into_iter().zip(self.values())
    }
}

/// Per-sub-score weights; a valid vector is non-negative and sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub market_opportunity: f64,
    pub business_viability: f64,
    pub technology_maturity: f64,
    pub team_execution: f64,
    pub strategic_fit: f64,
    pub regulatory_risk: f64,
}

impl WeightVector {
    pub const REFERENCE: WeightVector = WeightVector {
        market_opportunity: 0.25,
        business_viability: 0.15,
        technology_maturity: 0.15,
        team_execution: 0.20,
        strategic_fit: 0.15,
        regulatory_risk: 0.10,
    };

    pub const SUM_TOLERANCE: f64 = 1e-6;

    #[cfg(test)]
    pub fn uniform() -> Self {
        let share = 1.0 / 6.0;
        Self {
            market_opportunity: share,
            business_viability: share,
            technology_maturity: share,
            team_execution: share,
            strategic_fit: share,
            regulatory_risk: share,
        }
    }

    /// Values in `SUB_SCORE_KEYS` order.
    pub fn values(&self) -> [f64; 6] {
        [
            self.market_opportunity,
            self.business_viability,
            self.technology_maturity,
            self.team_execution,
            self.strategic_fit,
            self.regulatory_risk,
        ]
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> {
        SUB_SCORE_KEYS.into_iter().zip(self.values())
    }

    pub fn sum(&self) -> f64 {
        self.values().iter().sum()
    }

    pub fn set(&mut self, key: &str, weight: f64) -> bool {
        let slot = match key {
            "market_opportunity" => &mut self.market_opportunity,
            "business_viability" => &mut self.business_viability,
            "technology_maturity" => &mut self.technology_maturity,
            "team_execution" => &mut self.team_execution,
            "strategic_fit" => &mut self.strategic_fit,
            "regulatory_risk" => &mut self.regulatory_risk,
            _ => return false,
        };
        *slot = weight;
        true
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Weighted aggregate on the 0-100 scale, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinalScore(f64);

impl FinalScore {
    pub fn from_breakdown(breakdown: &ScoreBreakdown, weights: &WeightVector) -> Self {
        let weighted: f64 = breakdown
            .values()
            .iter()
            .zip(weights.values())
            .map(|(score, weight)| score * weight)
            .sum();
        Self(round2(weighted * 100.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    FastTrack,
    Review,
    Reject,
}

impl Disposition {
    pub fn label(self) -> &'static str {
        match self {
            Self::FastTrack => "Fast-Track",
            Self::Review => "Review",
            Self::Reject => "Reject",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(value: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            market_opportunity: value,
            business_viability: value,
            technology_maturity: value,
            team_execution: value,
            strategic_fit: value,
            regulatory_risk: value,
        }
    }

    #[test]
    fn reference_weights_sum_to_one() {
        assert!((WeightVector::REFERENCE.sum() - 1.0).abs() < WeightVector::SUM_TOLERANCE);
        assert!((WeightVector::uniform().sum() - 1.0).abs() < WeightVector::SUM_TOLERANCE);
    }

    #[test]
    fn final_score_spans_zero_to_hundred() {
        let weights = WeightVector::REFERENCE;
        assert_eq!(FinalScore::from_breakdown(&breakdown(0.0), &weights).value(), 0.0);
        assert_eq!(FinalScore::from_breakdown(&breakdown(1.0), &weights).value(), 100.0);
    }

    #[test]
    fn final_score_rounds_to_two_decimals() {
        let score = FinalScore::from_breakdown(&breakdown(1.0 / 3.0), &WeightVector::uniform());
        assert_eq!(score.value(), 33.33);
        assert_eq!(score.to_string(), "33.33");
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut weights = WeightVector::REFERENCE;
        assert!(weights.set("strategic_fit", 0.5));
        assert_eq!(weights.strategic_fit, 0.5);
        assert!(!weights.set("vibes", 0.1));
    }

    #[test]
    fn entries_follow_key_order() {
        let keys: Vec<_> = WeightVector::REFERENCE.entries().map(|(key, _)| key).collect();
        assert_eq!(keys, SUB_SCORE_KEYS.to_vec());
    }

    #[test]
    fn disposition_labels() {
        assert_eq!(Disposition::FastTrack.to_string(), "Fast-Track");
        assert_eq!(Disposition::Review.label(), "Review");
        assert_eq!(Disposition::Reject.label(), "Reject");
    }
}
