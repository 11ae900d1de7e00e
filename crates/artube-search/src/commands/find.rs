use artube_core::{Cache, Config};

pub fn run(config: Config, query: &str) -> anyhow::Result<()> {
    let cache = Cache::open(config)?;
    let result = cache.find(query)?;
    tracing::info!(query, matches = result.len(), "search finished");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
