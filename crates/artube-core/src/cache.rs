//! Keyword cache: index content under a key and search the stored entries

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::gate::{Freshness, FreshnessGate};
use crate::search::{self, FindResult};
use artube_index::{KeywordExtractor, TermWeights};
use artube_store::{validate_key, ChannelContent, Content, Entry, EntryStore, VideoContent};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Entry point for indexing and search. Safe to share between threads;
/// the model is read-only and every write goes through an atomic rename.
#[derive(Debug, Clone)]
pub struct Cache {
    config: Config,
    store: EntryStore,
    extractor: KeywordExtractor,
    gate: FreshnessGate,
}

impl Cache {
    /// Create the storage directory and train the model from the configured
    /// corpus. A missing or empty corpus is a startup failure.
    pub fn open(config: Config) -> Result<Self> {
        let model = TermWeights::from_path(&config.corpus_path)?;
        Self::with_model(config, Arc::new(model))
    }

    pub fn with_model(config: Config, model: Arc<TermWeights>) -> Result<Self> {
        let store = EntryStore::open(&config.cache_dir)?;
        let extractor = KeywordExtractor::with_threshold(model, config.salience_threshold);
        let gate = FreshnessGate::new(config.index_threshold);
        tracing::info!(cache_dir = %store.dir().display(), "keyword cache ready");
        Ok(Self {
            config,
            store,
            extractor,
            gate,
        })
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Whether `key` may be (re-)indexed now. Callers check this before
    /// fetching metadata upstream.
    pub fn should_index(&self, key: &str) -> bool {
        self.should_index_at(key, Utc::now())
    }

    pub fn should_index_at(&self, key: &str, now: DateTime<Utc>) -> bool {
        self.gate.should_index(&self.store, key, now)
    }

    pub fn index_video(&self, tx_id: &str, video: VideoContent) -> Result<Entry> {
        self.index_video_at(tx_id, video, Utc::now())
    }

    pub fn index_video_at(
        &self,
        tx_id: &str,
        video: VideoContent,
        now: DateTime<Utc>,
    ) -> Result<Entry> {
        self.index_at(tx_id, Content::Video(video), now)
    }

    pub fn index_channel(&self, addr: &str, channel: ChannelContent) -> Result<Entry> {
        self.index_channel_at(addr, channel, Utc::now())
    }

    pub fn index_channel_at(
        &self,
        addr: &str,
        channel: ChannelContent,
        now: DateTime<Utc>,
    ) -> Result<Entry> {
        self.index_at(addr, Content::Channel(channel), now)
    }

    fn index_at(&self, key: &str, content: Content, now: DateTime<Utc>) -> Result<Entry> {
        validate_key(key)?;

        if let Freshness::Fresh { last_indexed } = self.gate.check(&self.store, key, now) {
            return Err(CacheError::AlreadyIndexed {
                key: key.to_string(),
                last_indexed,
            });
        }

        let keywords = self.keywords_for(&content);
        if keywords.is_empty() {
            return Err(CacheError::EmptyKeywordSet {
                key: key.to_string(),
            });
        }

        let entry = Entry {
            keywords,
            last_indexed: now,
            content,
        };
        self.store.write(key, &entry)?;

        tracing::info!(
            key,
            content_type = %entry.content_type(),
            keywords = entry.keywords.len(),
            "indexed"
        );
        Ok(entry)
    }

    /// Keywords of each text field in turn, title or name first
    pub fn keywords_for(&self, content: &Content) -> Vec<String> {
        content
            .text_fields()
            .iter()
            .flat_map(|field| self.extractor.extract(field))
            .collect()
    }

    /// Every stored entry sharing a keyword with `query`, with its overlap
    /// score
    pub fn find(&self, query: &str) -> Result<FindResult> {
        let query_keywords = self.extractor.extract(query);
        tracing::debug!(query, keywords = ?query_keywords, "find");
        Ok(search::scan(
            &self.store,
            &query_keywords,
            self.config.scan_policy,
        )?)
    }

    pub fn read(&self, key: &str) -> Result<Entry> {
        Ok(self.store.read(key)?)
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(self.store.list_keys()?)
    }
}
