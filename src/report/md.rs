use crate::history::EvaluationHistory;
use crate::types::report::{Evaluation, EvaluationMode};
use crate::types::scoring::WeightVector;

const IDEA_WIDTH: usize = 48;

pub fn evaluation_to_markdown(evaluation: &Evaluation) -> String {
    let mut output = String::new();
    output.push_str("# Startup Evaluation\n\n");
    output.push_str(&format!(
        "Overall priority score: {}\n\n",
        evaluation.final_score
    ));
    output.push_str(&format!("Decision: {}\n\n", evaluation.disposition));

    let mode = match evaluation.mode {
        EvaluationMode::Manual => "manual",
        EvaluationMode::Auto => "auto",
    };
    output.push_str(&format!("Mode: {mode}\n\n"));

    if evaluation.mode == EvaluationMode::Auto {
        let attributes = &evaluation.attributes;
        output.push_str("## Inferred Attributes\n\n");
        output.push_str(&format!(
            "- market_size_musd: {}\n- revenue_model_strength: {}\n- technology_readiness: {}\n- team_experience: {}\n- regulatory_risk_level: {}\n- bmo_strategic_alignment: {}\n\n",
            attributes.market_size_musd,
            attributes.revenue_model_strength,
            attributes.technology_readiness,
            attributes.team_experience,
            attributes.regulatory_risk_level,
            attributes.bmo_strategic_alignment
        ));
    }

    output.push_str("## Decision Breakdown\n\n");
    for (key, value) in evaluation.breakdown.entries() {
        output.push_str(&format!("- {key}: {value:.3}\n"));
    }
    if evaluation.blended {
        output.push_str("\nstrategic_fit blended with pitch language alignment.\n");
    }

    output
}

pub fn dashboard_to_markdown(history: &EvaluationHistory) -> String {
    let mut output = String::new();
    output.push_str("# Manager Dashboard\n\n");
    let tally = history.tally();
    output.push_str(&format!(
        "Evaluations: {} (Fast-Track {}, Review {}, Reject {})\n\n",
        history.len(),
        tally.fast_track,
        tally.review,
        tally.reject
    ));

    output.push_str("## Top Startups Ranked by Priority Score\n\n");
    if history.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| # | Idea | Score | Decision | Market | Revenue | Tech | Team | Fit | Risk |\n");
    output.push_str("|---|---|---|---|---|---|---|---|---|---|\n");
    for (rank, entry) in history.ranked().iter().enumerate() {
        let breakdown = &entry.breakdown;
        output.push_str(&format!(
            "| {} | {} | {} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} |\n",
            rank + 1,
            table_cell(&entry.idea),
            entry.score,
            entry.disposition,
            breakdown.market_opportunity,
            breakdown.business_viability,
            breakdown.technology_maturity,
            breakdown.team_execution,
            breakdown.strategic_fit,
            breakdown.regulatory_risk
        ));
    }

    output
}

pub fn weights_to_markdown(weights: &WeightVector) -> String {
    let mut output = String::from("# Scoring Weights\n\n");
    for (key, weight) in weights.entries() {
        output.push_str(&format!("- {key}: {weight:.2}\n"));
    }
    output.push_str(&format!("\nTotal: {:.2}\n", weights.sum()));
    output
}

/// Single-line, pipe-safe, truncated idea text.
fn table_cell(idea: &str) -> String {
    let flat = idea.split_whitespace().collect::<Vec<_>>().join(" ");
    let escaped = flat.replace('|', "\\|");
    if escaped.chars().count() <= IDEA_WIDTH {
        return escaped;
    }
    let truncated: String = escaped.chars().take(IDEA_WIDTH - 3).collect();
    format!("{}...", truncated.trim_end())
}
