//! Configuration for the keyword cache

use chrono::Duration;
use std::path::PathBuf;

pub const CACHE_DIR_ENV: &str = "ARTUBE_SEARCH_CACHE_DIR";
pub const CORPUS_ENV: &str = "ARTUBE_SEARCH_CORPUS";
pub const SKIP_UNREADABLE_ENV: &str = "ARTUBE_SEARCH_SKIP_UNREADABLE";

pub const DEFAULT_CORPUS_PATH: &str = "assets/t8.shakespeare.txt";

/// Seconds that must pass before the same key may be indexed again
pub const INDEX_THRESHOLD_SECS: i64 = 60;

/// What a full-scan search does with a record it cannot read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPolicy {
    /// Fail the whole search
    #[default]
    Abort,
    /// Log the record and keep scanning
    Skip,
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one record file per key
    pub cache_dir: PathBuf,

    /// Reference text the term-weight model is trained on
    pub corpus_path: PathBuf,

    /// Keywords must weigh strictly more than this
    pub salience_threshold: f64,

    /// Minimum age of a record before its key is re-indexed
    pub index_threshold: Duration,

    pub scan_policy: ScanPolicy,
}

impl Config {
    pub fn new() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            salience_threshold: artube_index::SALIENCE_THRESHOLD,
            index_threshold: Duration::seconds(INDEX_THRESHOLD_SECS),
            scan_policy: ScanPolicy::Abort,
        }
    }

    /// Defaults overridden by the `ARTUBE_SEARCH_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(dir) = non_empty(CACHE_DIR_ENV) {
            config.cache_dir = PathBuf::from(dir);
        }
        if let Some(corpus) = non_empty(CORPUS_ENV) {
            config.corpus_path = PathBuf::from(corpus);
        }
        if let Some(flag) = non_empty(SKIP_UNREADABLE_ENV) {
            if parse_flag(&flag) {
                config.scan_policy = ScanPolicy::Skip;
            }
        }
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn default_cache_dir() -> PathBuf {
    std::env::temp_dir().join("artube-search")
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
