use super::open_store;
use artube_core::{Cache, CacheError, ChannelContent, Config, Entry, FreshnessGate, VideoContent};
use chrono::Utc;

pub fn run_video(
    config: Config,
    tx_id: &str,
    title: String,
    description: String,
    likes: u64,
    poster: String,
) -> anyhow::Result<()> {
    if !is_due(&config, tx_id) {
        tracing::info!(key = tx_id, "already indexed within threshold, skipping");
        return Ok(());
    }

    let cache = Cache::open(config)?;
    let video = VideoContent {
        title,
        description,
        likes,
        poster_tx_id: poster,
    };
    report(tx_id, cache.index_video(tx_id, video))
}

pub fn run_channel(
    config: Config,
    addr: &str,
    name: String,
    description: String,
    avatar: String,
) -> anyhow::Result<()> {
    if !is_due(&config, addr) {
        tracing::info!(key = addr, "already indexed within threshold, skipping");
        return Ok(());
    }

    let cache = Cache::open(config)?;
    let channel = ChannelContent {
        name,
        description,
        avatar_tx_id: avatar,
    };
    report(addr, cache.index_channel(addr, channel))
}

/// Gate check done before the model is loaded
fn is_due(config: &Config, key: &str) -> bool {
    FreshnessGate::new(config.index_threshold).should_index(&open_store(config), key, Utc::now())
}

fn report(key: &str, outcome: Result<Entry, CacheError>) -> anyhow::Result<()> {
    match outcome {
        Ok(entry) => {
            println!("{}", serde_json::to_string_pretty(&entry)?);
            Ok(())
        }
        // Lost a race with another indexer; not a failure
        Err(e) if e.is_already_indexed() => {
            tracing::warn!(key, "{}", e);
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("indexing {} failed", key))),
    }
}
