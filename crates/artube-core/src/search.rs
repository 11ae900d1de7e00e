//! Linear-scan keyword search over every stored entry

use crate::config::ScanPolicy;
use artube_store::{Entry, EntryStore, StoreError};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundItem {
    pub score: usize,
    pub entry: Entry,
}

/// Matches keyed by content identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FindResult {
    pub items: HashMap<String, FoundItem>,
}

impl FindResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn score(&self, key: &str) -> Option<usize> {
        self.items.get(key).map(|item| item.score)
    }

    /// Matches by descending score, ties broken by key
    pub fn ranked(&self) -> Vec<(&str, &FoundItem)> {
        let mut ranked: Vec<_> = self
            .items
            .iter()
            .map(|(key, item)| (key.as_str(), item))
            .collect();
        ranked.sort_by(|a, b| b.1.score.cmp(&a.1.score).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Number of equal (entry keyword, query keyword) pairs. Repeats on either
/// side each count.
pub fn overlap_score(entry_keywords: &[String], query_keywords: &[String]) -> usize {
    entry_keywords
        .iter()
        .map(|ek| query_keywords.iter().filter(|qk| *qk == ek).count())
        .sum()
}

/// Score every stored entry against `query_keywords`, keeping those with a
/// non-zero score
pub fn scan(
    store: &EntryStore,
    query_keywords: &[String],
    policy: ScanPolicy,
) -> Result<FindResult, StoreError> {
    let mut result = FindResult::default();
    if query_keywords.is_empty() {
        return Ok(result);
    }

    let keys = store.list_keys()?;
    let mut skipped = 0usize;
    for key in &keys {
        let entry = match store.read(key) {
            Ok(entry) => entry,
            Err(e) if policy == ScanPolicy::Skip => {
                tracing::warn!(key = %key, error = %e, "skipping unreadable entry");
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let score = overlap_score(&entry.keywords, query_keywords);
        if score > 0 {
            result.items.insert(key.clone(), FoundItem { score, entry });
        }
    }

    tracing::debug!(
        scanned = keys.len(),
        skipped,
        matched = result.len(),
        "search scan finished"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use artube_store::{Content, VideoContent};
    use chrono::Utc;
    use tempfile::TempDir;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn entry(keywords: &[&str]) -> Entry {
        Entry {
            keywords: kw(keywords),
            last_indexed: Utc::now(),
            content: Content::Video(VideoContent {
                title: keywords.join(" "),
                description: String::new(),
                likes: 0,
                poster_tx_id: String::new(),
            }),
        }
    }

    #[test]
    fn test_overlap_counts_pairs() {
        assert_eq!(overlap_score(&kw(&["x", "y"]), &kw(&["x", "y"])), 2);
        assert_eq!(overlap_score(&kw(&["y"]), &kw(&["x", "y"])), 1);
        assert_eq!(overlap_score(&kw(&["z"]), &kw(&["x", "y"])), 0);
    }

    #[test]
    fn test_overlap_duplicates_multiply() {
        assert_eq!(overlap_score(&kw(&["a", "a"]), &kw(&["a", "a", "a"])), 6);
    }

    #[test]
    fn test_scan_scores_entries() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();
        store.write("a", &entry(&["x", "y"])).unwrap();
        store.write("b", &entry(&["y"])).unwrap();
        store.write("c", &entry(&["w"])).unwrap();

        let result = scan(&store, &kw(&["x", "y"]), ScanPolicy::Abort).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.score("a"), Some(2));
        assert_eq!(result.score("b"), Some(1));
        assert_eq!(result.score("c"), None);

        let ranked: Vec<&str> = result.ranked().into_iter().map(|(k, _)| k).collect();
        assert_eq!(ranked, vec!["a", "b"]);

        let none = scan(&store, &kw(&["z"]), ScanPolicy::Abort).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_scan_policy_on_corrupt_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();
        store.write("good", &entry(&["x"])).unwrap();
        std::fs::write(temp_dir.path().join("broken"), b"garbage").unwrap();

        let err = scan(&store, &kw(&["x"]), ScanPolicy::Abort).unwrap_err();
        assert!(err.is_decode());

        let result = scan(&store, &kw(&["x"]), ScanPolicy::Skip).unwrap();
        assert_eq!(result.score("good"), Some(1));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_scan_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::new(temp_dir.path().join("missing"));
        let result = scan(&store, &kw(&["x"]), ScanPolicy::Abort).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_find_result_serializes_items() {
        let mut result = FindResult::default();
        result.items.insert(
            "TX1".to_string(),
            FoundItem {
                score: 2,
                entry: entry(&["launch"]),
            },
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["items"]["TX1"]["score"], 2);
        assert_eq!(json["items"]["TX1"]["entry"]["content"]["type"], "video");
    }
}
