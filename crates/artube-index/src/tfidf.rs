//! Term-weight model trained once on a fixed reference corpus

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static TOKENIZE_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("reference corpus {} unavailable: {source}", .path.display())]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reference corpus {} has no usable lines", .path.display())]
    EmptyCorpus { path: PathBuf },
}

/// TF-IDF scorer. Every line of the reference text counts as one document
/// of the background corpus; the corpus is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct TermWeights {
    doc_count: usize,
    doc_freq: HashMap<String, usize>,
}

impl TermWeights {
    pub fn new() -> Self {
        Self {
            doc_count: 0,
            doc_freq: HashMap::new(),
        }
    }

    /// Build the model from corpus lines. Identical lines are registered
    /// once and lines without tokens are ignored.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut model = Self::new();
        let mut seen: HashSet<String> = HashSet::new();
        for line in lines {
            let line = line.as_ref();
            if seen.contains(line) {
                continue;
            }
            seen.insert(line.to_string());
            model.add_document(line);
        }
        model
    }

    /// Load the reference text at `path` and train on it
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::CorpusUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let model = Self::from_lines(text.lines());
        if model.doc_count == 0 {
            return Err(ModelError::EmptyCorpus {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(
            corpus = %path.display(),
            documents = model.doc_count,
            terms = model.doc_freq.len(),
            "term-weight model ready"
        );
        Ok(model)
    }

    fn add_document(&mut self, doc: &str) {
        let unique: HashSet<&str> = tokenize(doc).collect();
        if unique.is_empty() {
            return;
        }
        self.doc_count += 1;
        for term in unique {
            *self.doc_freq.entry(term.to_string()).or_insert(0) += 1;
        }
    }

    /// Number of documents in the background corpus
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Weight every distinct word of `text` against the corpus.
    ///
    /// Returns one pair per distinct token, in order of first occurrence.
    /// Tokens keep their original case.
    pub fn weights(&self, text: &str) -> Vec<(String, f64)> {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut total = 0usize;

        for token in tokenize(text) {
            total += 1;
            let count = counts.entry(token).or_insert(0);
            if *count == 0 {
                order.push(token);
            }
            *count += 1;
        }

        order
            .into_iter()
            .map(|term| {
                let tf = counts[term] as f64 / total as f64;
                (term.to_string(), tf * self.idf(term))
            })
            .collect()
    }

    fn idf(&self, term: &str) -> f64 {
        let df = self.doc_freq.get(term).copied().unwrap_or(0);
        ((1 + self.doc_count) as f64 / (1 + df) as f64).ln()
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
    let re = TOKENIZE_RE.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+").unwrap());
    re.find_iter(text).map(|m| m.as_str())
}
