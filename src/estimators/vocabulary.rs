//! TF-IDF alignment of a single pitch against a fixed vocabulary.
//!
//! With a one-document corpus the smoothed inverse document frequency is 1
//! for every term that occurs, so the weighted vector reduces to raw term
//! counts. The vector is L2-normalized and averaged over the whole
//! vocabulary, which keeps the result in [0, 1] and yields 0 when nothing
//! matches.

use crate::estimators::AlignmentScorer;

// Multi-word terms count consecutive tokens, so "capital markets" scores
// here even though a unigram-only vectorizer would never match it.
pub const STRATEGIC_VOCABULARY: [&str; 10] = [
    "bank",
    "fintech",
    "ai",
    "risk",
    "compliance",
    "payments",
    "fraud",
    "lending",
    "wealth",
    "capital markets",
];

#[derive(Debug, Clone)]
pub struct VocabularyScorer {
    terms: Vec<Vec<String>>,
}

impl VocabularyScorer {
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = vocabulary
            .into_iter()
            .map(|term| tokenize(term.as_ref()))
            .filter(|tokens| !tokens.is_empty())
            .collect();
        Self { terms }
    }

    /// Occurrence count of each vocabulary term, in vocabulary order.
    pub fn term_counts(&self, text: &str) -> Vec<usize> {
        let tokens = tokenize(text);
        self.terms
            .iter()
            .map(|term| {
                if tokens.len() < term.len() {
                    return 0;
                }
                tokens
                    .windows(term.len())
                    .filter(|window| *window == term.as_slice())
                    .count()
            })
            .collect()
    }
}

impl Default for VocabularyScorer {
    fn default() -> Self {
        Self::new(STRATEGIC_VOCABULARY)
    }
}

impl AlignmentScorer for VocabularyScorer {
    fn alignment(&self, text: &str) -> f64 {
        if self.terms.is_empty() {
            return 0.0;
        }
        let counts = self.term_counts(text);
        let norm = counts
            .iter()
            .map(|&count| (count as f64).powi(2))
            .sum::<f64>()
            .sqrt();
        if norm == 0.0 {
            return 0.0;
        }
        let total: f64 = counts.iter().map(|&count| count as f64 / norm).sum();
        (total / self.terms.len() as f64).clamp(0.0, 1.0)
    }
}

/// Lowercased runs of two or more word characters.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| word.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect()
}
