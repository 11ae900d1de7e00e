//! One-file-per-key entry store

use crate::error::{Result, StoreError};
use crate::io::{atomic_write, list_files};
use crate::types::Entry;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Bumped whenever the on-disk record layout changes
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct RecordOut<'a> {
    schema: u32,
    entry: &'a Entry,
}

#[derive(Deserialize)]
struct RecordIn {
    schema: u32,
    entry: serde_json::Value,
}

/// Durable store keeping each entry in its own file, named after the key,
/// inside a single directory
#[derive(Debug, Clone)]
pub struct EntryStore {
    dir: PathBuf,
}

impl EntryStore {
    /// Store over `dir` without touching the filesystem
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store over `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(dir);
        std::fs::create_dir_all(&store.dir).map_err(|source| StoreError::Storage {
            op: "create",
            key: store.dir.display().to_string(),
            source,
        })?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the record backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }

    /// Persist `entry` under `key`, atomically replacing any previous record
    pub fn write(&self, key: &str, entry: &Entry) -> Result<()> {
        let path = self.path_for(key)?;
        let record = RecordOut {
            schema: SCHEMA_VERSION,
            entry,
        };
        let data = serde_json::to_vec(&record).map_err(|e| StoreError::Storage {
            op: "encode",
            key: key.to_string(),
            source: std::io::Error::new(ErrorKind::InvalidData, e),
        })?;

        atomic_write(&path, &data).map_err(|source| StoreError::Storage {
            op: "write",
            key: key.to_string(),
            source,
        })?;

        tracing::debug!(key, keywords = entry.keywords.len(), "entry written");
        Ok(())
    }

    pub fn read(&self, key: &str) -> Result<Entry> {
        let path = self.path_for(key)?;
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    key: key.to_string(),
                })
            }
            Err(source) => {
                return Err(StoreError::Storage {
                    op: "read",
                    key: key.to_string(),
                    source,
                })
            }
        };
        decode(key, &data)
    }

    /// Keys of every persisted record, in no particular order.
    /// A directory that doesn't exist yet holds no keys.
    pub fn list_keys(&self) -> Result<Vec<String>> {
        match list_files(&self.dir) {
            Ok(keys) => Ok(keys),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(StoreError::Storage {
                op: "list",
                key: self.dir.display().to_string(),
                source,
            }),
        }
    }
}

fn decode(key: &str, data: &[u8]) -> Result<Entry> {
    let decode_err = |reason: String| StoreError::Decode {
        key: key.to_string(),
        reason,
    };

    let record: RecordIn = serde_json::from_slice(data).map_err(|e| decode_err(e.to_string()))?;
    if record.schema != SCHEMA_VERSION {
        return Err(decode_err(format!(
            "unsupported schema version {} (expected {})",
            record.schema, SCHEMA_VERSION
        )));
    }
    serde_json::from_value(record.entry).map_err(|e| decode_err(e.to_string()))
}

/// Keys double as file names: reject anything that could escape the
/// directory or collide with in-flight temp files
pub fn validate_key(key: &str) -> Result<()> {
    let reason = if key.is_empty() {
        Some("key is empty")
    } else if key.starts_with('.') {
        Some("key must not start with '.'")
    } else if key.contains(['/', '\\', '\0']) {
        Some("key must not contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChannelContent, Content, VideoContent};
    use chrono::Utc;
    use tempfile::TempDir;

    fn video_entry(title: &str) -> Entry {
        Entry {
            keywords: vec!["great".to_string(), "launch".to_string()],
            last_indexed: Utc::now(),
            content: Content::Video(VideoContent {
                title: title.to_string(),
                description: "Great Launch Day".to_string(),
                likes: 3,
                poster_tx_id: "poster".to_string(),
            }),
        }
    }

    fn channel_entry() -> Entry {
        Entry {
            keywords: vec!["space".to_string()],
            last_indexed: Utc::now(),
            content: Content::Channel(ChannelContent {
                name: "Space".to_string(),
                description: "rockets and more".to_string(),
                avatar_tx_id: "avatar".to_string(),
            }),
        }
    }

    #[test]
    fn test_write_read_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();

        let video = video_entry("Great Launch");
        let channel = channel_entry();
        store.write("TX1", &video).unwrap();
        store.write("addr-1", &channel).unwrap();

        assert_eq!(store.read("TX1").unwrap(), video);
        assert_eq!(store.read("addr-1").unwrap(), channel);
    }

    #[test]
    fn test_write_replaces_entry() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();

        store.write("TX1", &video_entry("first")).unwrap();
        let second = channel_entry();
        store.write("TX1", &second).unwrap();

        assert_eq!(store.read("TX1").unwrap(), second);
        assert_eq!(store.list_keys().unwrap(), vec!["TX1"]);
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();
        let err = store.read("nope").unwrap_err();
        assert!(err.is_not_found(), "{}", err);
    }

    #[test]
    fn test_read_corrupt_is_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();
        std::fs::write(temp_dir.path().join("bad"), b"\x00\x01garbage").unwrap();
        let err = store.read("bad").unwrap_err();
        assert!(err.is_decode(), "{}", err);
    }

    #[test]
    fn test_read_other_schema_is_decode_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();
        store.write("TX1", &video_entry("x")).unwrap();

        let path = temp_dir.path().join("TX1");
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::write(&path, text.replace(r#""schema":1"#, r#""schema":99"#)).unwrap();

        let err = store.read("TX1").unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("schema version 99"));
    }

    #[test]
    fn test_list_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();
        store.write("b", &video_entry("b")).unwrap();
        store.write("a", &channel_entry()).unwrap();

        let mut keys = store.list_keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_list_keys_missing_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::new(temp_dir.path().join("not-created"));
        assert!(store.list_keys().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let store = EntryStore::open(temp_dir.path()).unwrap();
        for key in ["", ".", "..", ".hidden", "a/b", "..\\x"] {
            let err = store.write(key, &channel_entry()).unwrap_err();
            assert!(
                matches!(err, StoreError::InvalidKey { .. }),
                "{:?} accepted",
                key
            );
        }
        assert!(store.list_keys().unwrap().is_empty());
    }

    #[test]
    fn test_write_to_unwritable_location_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, b"not a dir").unwrap();

        let store = EntryStore::new(&blocker);
        let err = store.write("TX1", &channel_entry()).unwrap_err();
        assert!(matches!(err, StoreError::Storage { op: "write", .. }), "{}", err);
    }
}
