use artube_core::{Config, ScanPolicy};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "artube-search")]
#[command(version)]
#[command(about = "Keyword index and search cache for artube videos and channels")]
pub struct Cli {
    /// Cache directory (overrides ARTUBE_SEARCH_CACHE_DIR)
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Reference corpus for the term-weight model (overrides ARTUBE_SEARCH_CORPUS)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Skip unreadable records instead of failing the search
    #[arg(long, global = true)]
    pub skip_unreadable: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Environment configuration with command-line overrides applied
    pub fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(dir) = &self.cache_dir {
            config.cache_dir = dir.clone();
        }
        if let Some(corpus) = &self.corpus {
            config.corpus_path = corpus.clone();
        }
        if self.skip_unreadable {
            config.scan_policy = ScanPolicy::Skip;
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search indexed content by keyword overlap
    Find {
        /// Free-text query
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Index a video under its transaction id
    IndexVideo {
        tx_id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value_t = 0)]
        likes: u64,
        /// Poster transaction id
        #[arg(long, default_value = "")]
        poster: String,
    },

    /// Index a channel under its owner address
    IndexChannel {
        addr: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Avatar transaction id
        #[arg(long, default_value = "")]
        avatar: String,
    },

    /// Report whether a key is due for (re-)indexing
    ShouldIndex { key: String },

    /// Print the stored entry for a key
    Show { key: String },

    /// List every stored key
    Keys,

    /// Print version information
    Version,
}
