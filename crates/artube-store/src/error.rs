use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entry for key {key}")]
    NotFound { key: String },

    #[error("failed to decode entry {key}: {reason}")]
    Decode { key: String, reason: String },

    #[error("storage {op} failed for {key}: {source}")]
    Storage {
        op: &'static str,
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, StoreError::Decode { .. })
    }
}
