use artube_index::ModelError;
use artube_store::StoreError;
use chrono::{DateTime, Utc};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CacheError>;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("no keywords above salience threshold for {key}, will not index")]
    EmptyKeywordSet { key: String },

    #[error("{key} already indexed within threshold (last indexed {last_indexed})")]
    AlreadyIndexed {
        key: String,
        last_indexed: DateTime<Utc>,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CacheError {
    pub fn is_already_indexed(&self) -> bool {
        matches!(self, CacheError::AlreadyIndexed { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::Store(e) if e.is_not_found())
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, CacheError::Store(e) if e.is_decode())
    }
}
