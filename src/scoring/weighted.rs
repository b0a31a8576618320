use crate::error::Result;
use crate::scoring::normalize::normalize;
use crate::types::attributes::StartupAttributes;
use crate::types::scoring::{FinalScore, ScoreBreakdown, WeightVector};
use tracing::debug;

/// Declared `(min, max)` range of a raw attribute.
pub type AttributeRange = (f64, f64);

pub const MARKET_SIZE_RANGE: AttributeRange = (50.0, 5000.0);
pub const RATING_RANGE: AttributeRange = (1.0, 5.0);

pub fn score(
    attributes: &StartupAttributes,
    weights: &WeightVector,
) -> Result<(FinalScore, ScoreBreakdown)> {
    let breakdown = breakdown(attributes)?;
    let final_score = FinalScore::from_breakdown(&breakdown, weights);
    debug!(?breakdown, %final_score, "scored attributes");
    Ok((final_score, breakdown))
}

fn breakdown(attributes: &StartupAttributes) -> Result<ScoreBreakdown> {
    let (market_min, market_max) = MARKET_SIZE_RANGE;
    let (rating_min, rating_max) = RATING_RANGE;
    Ok(ScoreBreakdown {
        market_opportunity: normalize(attributes.market_size_musd, market_min, market_max)?,
        business_viability: normalize(attributes.revenue_model_strength, rating_min, rating_max)?,
        technology_maturity: normalize(attributes.technology_readiness, rating_min, rating_max)?,
        team_execution: normalize(attributes.team_experience, rating_min, rating_max)?,
        strategic_fit: normalize(attributes.bmo_strategic_alignment, rating_min, rating_max)?,
        regulatory_risk: 1.0
            - normalize(attributes.regulatory_risk_level, rating_min, rating_max)?,
    })
}
