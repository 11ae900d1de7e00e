#![allow(dead_code)]

use artube_core::{Cache, ChannelContent, Config, TermWeights, VideoContent};
use std::path::Path;
use std::sync::Arc;

/// Every line contains "the", so "the" never clears the salience threshold
pub const SAMPLE_CORPUS: &str = "\
to be or not to be that is the question
whether tis nobler in the mind to suffer
the slings and arrows of outrageous fortune
or to take arms against the sea of troubles
and by opposing end the troubles to die
no more and by the sleep to say we end
the heart ache and the thousand natural shocks
that flesh is heir to the consummation";

pub fn sample_model() -> Arc<TermWeights> {
    Arc::new(TermWeights::from_lines(SAMPLE_CORPUS.lines()))
}

pub fn sample_config(dir: &Path) -> Config {
    Config {
        cache_dir: dir.to_path_buf(),
        ..Config::new()
    }
}

pub fn sample_cache(dir: &Path) -> Cache {
    Cache::with_model(sample_config(dir), sample_model()).unwrap()
}

pub fn video(title: &str, description: &str) -> VideoContent {
    VideoContent {
        title: title.to_string(),
        description: description.to_string(),
        likes: 0,
        poster_tx_id: "poster-tx".to_string(),
    }
}

pub fn channel(name: &str, description: &str) -> ChannelContent {
    ChannelContent {
        name: name.to_string(),
        description: description.to_string(),
        avatar_tx_id: "avatar-tx".to_string(),
    }
}
