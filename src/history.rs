use crate::types::report::Evaluation;
use crate::types::scoring::{Disposition, FinalScore, ScoreBreakdown};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::warn;

pub const MANUAL_IDEA_LABEL: &str = "Manual Input Idea";

/// One dashboard row.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub idea: String,
    pub score: FinalScore,
    pub disposition: Disposition,
    pub breakdown: ScoreBreakdown,
    pub evaluated_at: DateTime<Utc>,
    pub fingerprint: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispositionTally {
    pub fast_track: usize,
    pub review: usize,
    pub reject: usize,
}

/// Append-only record of the evaluations made during one session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvaluationHistory {
    entries: Vec<HistoryEntry>,
}

impl EvaluationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, evaluation: &Evaluation) -> &HistoryEntry {
        let fingerprint = fingerprint(evaluation);
        if self
            .entries
            .iter()
            .any(|entry| entry.fingerprint == fingerprint)
        {
            warn!(%fingerprint, "submission was already evaluated in this session");
        }
        let idea = evaluation
            .pitch
            .clone()
            .unwrap_or_else(|| MANUAL_IDEA_LABEL.to_string());
        self.entries.push(HistoryEntry {
            idea,
            score: evaluation.final_score,
            disposition: evaluation.disposition,
            breakdown: evaluation.breakdown,
            evaluated_at: Utc::now(),
            fingerprint,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries by score, highest first; equal scores keep insertion order.
    pub fn ranked(&self) -> Vec<&HistoryEntry> {
        let mut ranked: Vec<&HistoryEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.score.value().total_cmp(&a.score.value()));
        ranked
    }

    pub fn tally(&self) -> DispositionTally {
        self.entries()
            .iter()
            .fold(DispositionTally::default(), |mut tally, entry| {
                match entry.disposition {
                    Disposition::FastTrack => tally.fast_track += 1,
                    Disposition::Review => tally.review += 1,
                    Disposition::Reject => tally.reject += 1,
                }
                tally
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// SHA-256 over the raw attributes and pitch, hex encoded.
fn fingerprint(evaluation: &Evaluation) -> String {
    let attributes = &evaluation.attributes;
    let mut hasher = Sha256::new();
    for value in [
        attributes.market_size_musd,
        attributes.revenue_model_strength,
        attributes.technology_readiness,
        attributes.team_experience,
        attributes.regulatory_risk_level,
        attributes.bmo_strategic_alignment,
    ] {
        hasher.update(value.to_le_bytes());
    }
    hasher.update(evaluation.pitch.as_deref().unwrap_or_default().as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
