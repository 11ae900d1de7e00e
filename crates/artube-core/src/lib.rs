//! Keyword indexing and search cache

mod cache;
mod config;
mod error;
mod gate;
mod search;

pub use cache::Cache;
pub use config::{
    Config, ScanPolicy, CACHE_DIR_ENV, CORPUS_ENV, DEFAULT_CORPUS_PATH, INDEX_THRESHOLD_SECS,
    SKIP_UNREADABLE_ENV,
};
pub use error::{CacheError, Result};
pub use gate::{Freshness, FreshnessGate};
pub use search::{overlap_score, scan, FindResult, FoundItem};

pub use artube_index::{KeywordExtractor, ModelError, TermWeights, SALIENCE_THRESHOLD};
pub use artube_store::{
    ChannelContent, Content, ContentType, Entry, EntryStore, StoreError, VideoContent,
};
