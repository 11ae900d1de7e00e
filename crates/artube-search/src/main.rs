mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    match cli.command {
        Commands::Find { query } => commands::find::run(config, &query.join(" ")),
        Commands::IndexVideo {
            tx_id,
            title,
            description,
            likes,
            poster,
        } => commands::index::run_video(config, &tx_id, title, description, likes, poster),
        Commands::IndexChannel {
            addr,
            name,
            description,
            avatar,
        } => commands::index::run_channel(config, &addr, name, description, avatar),
        Commands::ShouldIndex { key } => commands::should_index::run(&config, &key),
        Commands::Show { key } => commands::show::run(&config, &key),
        Commands::Keys => commands::keys::run(&config),
        Commands::Version => commands::version::run(),
    }
}
