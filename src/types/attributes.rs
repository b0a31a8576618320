use crate::error::{IntakeError, Result};
use serde::{Deserialize, Serialize};

/// Raw attributes of a startup submission, every field present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartupAttributes {
    pub market_size_musd: f64,
    pub revenue_model_strength: f64,
    pub technology_readiness: f64,
    pub team_experience: f64,
    /// Lower is better.
    pub regulatory_risk_level: f64,
    pub bmo_strategic_alignment: f64,
}

/// Attribute set as supplied by files or callers, before the fill policy runs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeInput {
    pub market_size_musd: Option<f64>,
    pub revenue_model_strength: Option<f64>,
    pub technology_readiness: Option<f64>,
    pub team_experience: Option<f64>,
    pub regulatory_risk_level: Option<f64>,
    pub bmo_strategic_alignment: Option<f64>,
}

impl AttributeInput {
    /// Strict conversion: the first absent field is reported by name.
    pub fn complete(&self) -> Result<StartupAttributes> {
        Ok(StartupAttributes {
            market_size_musd: require(self.market_size_musd, "market_size_musd")?,
            revenue_model_strength: require(
                self.revenue_model_strength,
                "revenue_model_strength",
            )?,
            technology_readiness: require(self.technology_readiness, "technology_readiness")?,
            team_experience: require(self.team_experience, "team_experience")?,
            regulatory_risk_level: require(self.regulatory_risk_level, "regulatory_risk_level")?,
            bmo_strategic_alignment: require(
                self.bmo_strategic_alignment,
                "bmo_strategic_alignment",
            )?,
        })
    }

    /// Lenient conversion: absent fields become 0.
    pub fn with_defaults(&self) -> Result<StartupAttributes> {
        Ok(StartupAttributes {
            market_size_musd: or_zero(self.market_size_musd, "market_size_musd")?,
            revenue_model_strength: or_zero(
                self.revenue_model_strength,
                "revenue_model_strength",
            )?,
            technology_readiness: or_zero(self.technology_readiness, "technology_readiness")?,
            team_experience: or_zero(self.team_experience, "team_experience")?,
            regulatory_risk_level: or_zero(self.regulatory_risk_level, "regulatory_risk_level")?,
            bmo_strategic_alignment: or_zero(
                self.bmo_strategic_alignment,
                "bmo_strategic_alignment",
            )?,
        })
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("market_size_musd", self.market_size_musd),
            ("revenue_model_strength", self.revenue_model_strength),
            ("technology_readiness", self.technology_readiness),
            ("team_experience", self.team_experience),
            ("regulatory_risk_level", self.regulatory_risk_level),
            ("bmo_strategic_alignment", self.bmo_strategic_alignment),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

fn require(value: Option<f64>, field: &str) -> Result<f64> {
    let value = value.ok_or_else(|| IntakeError::MissingAttribute(field.to_string()))?;
    finite(value, field)
}

fn or_zero(value: Option<f64>, field: &str) -> Result<f64> {
    finite(value.unwrap_or(0.0), field)
}

// TOML and JSON both accept nan and inf literals.
fn finite(value: f64, field: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IntakeError::InvalidAttribute(format!(
            "{field} must be a finite number (found {value})"
        )))
    }
}
