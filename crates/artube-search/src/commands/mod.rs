pub mod find;
pub mod index;
pub mod keys;
pub mod should_index;
pub mod show;
pub mod version;

use artube_core::{Config, EntryStore};

/// Store over the configured directory. Read-only commands use this to
/// avoid training the term-weight model.
pub(crate) fn open_store(config: &Config) -> EntryStore {
    EntryStore::new(&config.cache_dir)
}
