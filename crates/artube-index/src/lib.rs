//! TF-IDF term weighting and keyword extraction

mod keywords;
mod tfidf;

pub use keywords::{KeywordExtractor, SALIENCE_THRESHOLD};
pub use tfidf::{ModelError, TermWeights};
