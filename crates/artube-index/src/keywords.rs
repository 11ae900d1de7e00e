//! Salient keyword extraction on top of the term-weight model

use crate::tfidf::TermWeights;
use std::sync::Arc;

/// Minimum weight a word must exceed to count as a keyword
pub const SALIENCE_THRESHOLD: f64 = 0.08;

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    model: Arc<TermWeights>,
    threshold: f64,
}

impl KeywordExtractor {
    pub fn new(model: Arc<TermWeights>) -> Self {
        Self::with_threshold(model, SALIENCE_THRESHOLD)
    }

    pub fn with_threshold(model: Arc<TermWeights>, threshold: f64) -> Self {
        Self { model, threshold }
    }

    /// Lower-cased words of `text` whose weight is strictly above the
    /// threshold. Case folding may produce repeats; they are kept.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.model
            .weights(text)
            .into_iter()
            .filter(|(_, weight)| *weight > self.threshold)
            .map(|(term, _)| term.to_lowercase())
            .collect()
    }
}
