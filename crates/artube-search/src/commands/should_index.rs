use super::open_store;
use artube_core::{Config, FreshnessGate};
use chrono::Utc;

pub fn run(config: &Config, key: &str) -> anyhow::Result<()> {
    artube_store::validate_key(key)?;
    let gate = FreshnessGate::new(config.index_threshold);
    let freshness = gate.check(&open_store(config), key, Utc::now());
    tracing::debug!(key, ?freshness, "gate consulted");
    println!("{}", freshness.is_due());
    Ok(())
}
