use crate::estimators::AttributeEstimator;
use crate::types::attributes::StartupAttributes;
use tracing::debug;

/// Ordered keyword rules for one attribute; the first rule with any
/// matching phrase wins, otherwise `default` applies.
struct FieldRules {
    default: f64,
    rules: &'static [(&'static [&'static str], f64)],
}

impl FieldRules {
    fn resolve(&self, text: &str) -> f64 {
        self.rules
            .iter()
            .find(|(phrases, _)| phrases.iter().any(|phrase| text.contains(phrase)))
            .map(|(_, value)| *value)
            .unwrap_or(self.default)
    }
}

const MARKET: FieldRules = FieldRules {
    default: 500.0,
    rules: &[
        (&["large market", "millions"], 3000.0),
        (&["small market"], 100.0),
    ],
};

const REVENUE: FieldRules = FieldRules {
    default: 3.0,
    rules: &[
        (&["subscription", "recurring revenue"], 5.0),
        (&["ad-supported"], 3.0),
    ],
};

const TECHNOLOGY: FieldRules = FieldRules {
    default: 3.0,
    rules: &[
        (&["ai", "machine learning", "fintech"], 5.0),
        (&["prototype"], 2.0),
    ],
};

const TEAM: FieldRules = FieldRules {
    default: 3.0,
    rules: &[
        (&["experienced team", "founder with track record"], 5.0),
        (&["new team"], 2.0),
    ],
};

const REGULATORY_RISK: FieldRules = FieldRules {
    default: 3.0,
    rules: &[
        (&["compliance", "regulation"], 2.0),
        (&["uncertain market", "risky"], 5.0),
    ],
};

const STRATEGIC_ALIGNMENT: FieldRules = FieldRules {
    default: 3.0,
    rules: &[(&["bank", "bmo", "aligns with bank"], 5.0)],
};

/// Substring heuristics over the lowercased pitch.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordEstimator;

impl AttributeEstimator for KeywordEstimator {
    fn infer(&self, text: &str) -> StartupAttributes {
        let text = text.to_lowercase();
        let attributes = StartupAttributes {
            market_size_musd: MARKET.resolve(&text),
            revenue_model_strength: REVENUE.resolve(&text),
            technology_readiness: TECHNOLOGY.resolve(&text),
            team_experience: TEAM.resolve(&text),
            regulatory_risk_level: REGULATORY_RISK.resolve(&text),
            bmo_strategic_alignment: STRATEGIC_ALIGNMENT.resolve(&text),
        };
        debug!(?attributes, "inferred attributes from pitch");
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_attributes() -> StartupAttributes {
        StartupAttributes {
            market_size_musd: 500.0,
            revenue_model_strength: 3.0,
            technology_readiness: 3.0,
            team_experience: 3.0,
            regulatory_risk_level: 3.0,
            bmo_strategic_alignment: 3.0,
        }
    }

    #[test]
    fn empty_text_returns_defaults() {
        assert_eq!(KeywordEstimator.infer(""), default_attributes());
        assert_eq!(KeywordEstimator.infer("   \n\t"), default_attributes());
    }

    #[test]
    fn first_matching_rule_wins() {
        let attributes =
            KeywordEstimator.infer("A prototype built with machine learning for a small market");
        assert_eq!(attributes.technology_readiness, 5.0);
        assert_eq!(attributes.market_size_musd, 100.0);

        let risky = KeywordEstimator.infer("risky bet but compliance first");
        assert_eq!(risky.regulatory_risk_level, 2.0);
    }

    #[test]
    fn rules_are_case_insensitive() {
        let attributes = KeywordEstimator.infer(
            "Experienced Team selling SUBSCRIPTION software to every BANK in a Large Market",
        );
        assert_eq!(attributes.team_experience, 5.0);
        assert_eq!(attributes.revenue_model_strength, 5.0);
        assert_eq!(attributes.bmo_strategic_alignment, 5.0);
        assert_eq!(attributes.market_size_musd, 3000.0);
    }

    #[test]
    fn lower_tier_rules_apply() {
        let attributes = KeywordEstimator.infer("new team with a prototype, risky, ad-supported");
        assert_eq!(attributes.team_experience, 2.0);
        assert_eq!(attributes.technology_readiness, 2.0);
        assert_eq!(attributes.regulatory_risk_level, 5.0);
        assert_eq!(attributes.revenue_model_strength, 3.0);
    }

    #[test]
    fn phrases_match_inside_words() {
        // "uncertain" contains "ai"
        let attributes = KeywordEstimator.infer("uncertain market");
        assert_eq!(attributes.regulatory_risk_level, 5.0);
        assert_eq!(attributes.technology_readiness, 5.0);
    }
}
