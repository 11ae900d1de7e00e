use super::open_store;
use anyhow::Context;
use artube_core::Config;

pub fn run(config: &Config, key: &str) -> anyhow::Result<()> {
    let entry = open_store(config)
        .read(key)
        .with_context(|| format!("failed to read entry {}", key))?;
    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}
