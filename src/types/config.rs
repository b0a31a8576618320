use crate::error::IntakeError;
use crate::types::scoring::{WeightVector, SUB_SCORE_KEYS};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeConfig {
    pub weights: Option<HashMap<String, f64>>,
}

impl IntakeConfig {
    /// Reference weights with any configured keys overridden.
    pub fn weights(&self) -> WeightVector {
        let mut weights = WeightVector::REFERENCE;
        if let Some(overrides) = &self.weights {
            for key in SUB_SCORE_KEYS {
                if let Some(weight) = overrides.get(key) {
                    weights.set(key, *weight);
                }
            }
        }
        weights
    }

    pub fn validate(&self) -> Result<(), IntakeError> {
        if let Some(overrides) = &self.weights {
            let mut unknown = overrides
                .keys()
                .filter(|key| !SUB_SCORE_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(IntakeError::InvalidWeights(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights();
        if let Some((key, weight)) = weights
            .entries()
            .find(|(_, weight)| !(0.0..=1.0).contains(weight))
        {
            return Err(IntakeError::InvalidWeights(format!(
                "weights.{key} must be between 0.0 and 1.0 (found {weight})"
            )));
        }
        let weight_sum = weights.sum();
        if (weight_sum - 1.0).abs() > WeightVector::SUM_TOLERANCE {
            return Err(IntakeError::InvalidWeights(format!(
                "weights must sum to 1.0 (found {weight_sum:.6})"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_default_to_reference_table() {
        let cfg: IntakeConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.weights(), WeightVector::REFERENCE);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn weights_override_individual_keys() {
        let cfg: IntakeConfig = toml::from_str(
            r#"
[weights]
market_opportunity = 0.20
regulatory_risk = 0.15
"#,
        )
        .expect("config should parse");
        let weights = cfg.weights();
        assert_eq!(weights.market_opportunity, 0.20);
        assert_eq!(weights.regulatory_risk, 0.15);
        assert_eq!(weights.team_execution, 0.20);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_weights_not_summing_to_one() {
        let cfg: IntakeConfig = toml::from_str(
            r#"
[weights]
market_opportunity = 0.50
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("must sum to 1.0"));
    }

    #[test]
    fn validate_rejects_unknown_weight_keys() {
        let cfg: IntakeConfig = toml::from_str(
            r#"
[weights]
hype = 0.01
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unknown key"));
        assert!(err.to_string().contains("hype"));
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let cfg: IntakeConfig = toml::from_str(
            r#"
[weights]
market_opportunity = -0.25
business_viability = 0.65
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("weights.market_opportunity"));
    }
}
