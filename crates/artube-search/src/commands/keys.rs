use super::open_store;
use artube_core::Config;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut keys = open_store(config).list_keys()?;
    keys.sort();
    for key in &keys {
        println!("{key}");
    }
    tracing::debug!(count = keys.len(), "keys listed");
    Ok(())
}
