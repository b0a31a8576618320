use crate::history::{DispositionTally, EvaluationHistory, HistoryEntry};
use crate::types::report::Evaluation;
use serde::Serialize;

#[derive(Serialize)]
struct Dashboard<'a> {
    total: usize,
    tally: DispositionTally,
    ranked: Vec<&'a HistoryEntry>,
}

pub fn evaluation_to_json(evaluation: &Evaluation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(evaluation)
}

pub fn dashboard_to_json(history: &EvaluationHistory) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Dashboard {
        total: history.len(),
        tally: history.tally(),
        ranked: history.ranked(),
    })
}
