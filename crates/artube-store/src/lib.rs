//! Durable per-key storage of indexed entries

mod error;
mod io;
mod store;
mod types;

pub use error::{Result, StoreError};
pub use io::{atomic_write, list_files};
pub use store::{validate_key, EntryStore, SCHEMA_VERSION};
pub use types::{ChannelContent, Content, ContentType, Entry, VideoContent};
