//! Freshness gate rate-limiting re-indexing of a key

use artube_store::{EntryStore, StoreError};
use chrono::{DateTime, Duration, Utc};

/// Outcome of consulting the gate for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Nothing stored yet
    Absent,
    /// A record exists but can't be read back
    Unreadable,
    /// Indexed long enough ago to be redone
    Stale { last_indexed: DateTime<Utc> },
    /// Indexed within the threshold
    Fresh { last_indexed: DateTime<Utc> },
}

impl Freshness {
    pub fn is_due(&self) -> bool {
        !matches!(self, Freshness::Fresh { .. })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FreshnessGate {
    threshold: Duration,
}

impl FreshnessGate {
    pub fn new(threshold: Duration) -> Self {
        Self { threshold }
    }

    /// Classify `key` as of `now`. The check and any following write are
    /// not atomic: racing indexers may both pass and the last write wins.
    pub fn check(&self, store: &EntryStore, key: &str, now: DateTime<Utc>) -> Freshness {
        let freshness = match store.read(key) {
            Ok(entry) => {
                let last_indexed = entry.last_indexed;
                // A due time past the representable range is never reached
                let due = last_indexed
                    .checked_add_signed(self.threshold)
                    .is_some_and(|due_at| due_at <= now);
                if due {
                    Freshness::Stale { last_indexed }
                } else {
                    Freshness::Fresh { last_indexed }
                }
            }
            Err(StoreError::NotFound { .. }) => Freshness::Absent,
            Err(e) => {
                tracing::debug!(key, error = %e, "existing record unreadable, allowing re-index");
                Freshness::Unreadable
            }
        };
        tracing::debug!(key, ?freshness, "freshness checked");
        freshness
    }

    pub fn should_index(&self, store: &EntryStore, key: &str, now: DateTime<Utc>) -> bool {
        self.check(store, key, now).is_due()
    }
}
