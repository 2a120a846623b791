//! Map generation script - writes generated maps as JSON
//!
//! Run with:
//! ```
//! cargo run -p worldmap --bin worldmap
//! ```
//!
//! Environment:
//! - `WORLDMAP_CONFIG`: path to a JSON `MapConfig` (defaults to the sample map)
//! - `WORLDMAP_OUT`: output directory (default `maps`)
//! - `WORLDMAP_SEED`: base seed, overrides the config
//! - `WORLDMAP_COUNT`: number of maps to generate (default 1)

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use worldmap::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = match std::env::var("WORLDMAP_CONFIG") {
        Ok(path) => MapConfig::from_json_file(&path)
            .with_context(|| format!("failed to load config from {path}"))?,
        Err(_) => MapConfig::default(),
    };

    if let Ok(seed) = std::env::var("WORLDMAP_SEED") {
        config.seed = Some(seed.parse().context("WORLDMAP_SEED must be an integer")?);
    }

    let count: usize = match std::env::var("WORLDMAP_COUNT") {
        Ok(count) => count.parse().context("WORLDMAP_COUNT must be an integer")?,
        Err(_) => 1,
    };

    let out_dir = std::env::var("WORLDMAP_OUT").unwrap_or_else(|_| "maps".to_string());
    let store = MapStore::new(out_dir);

    tracing::info!(
        "Generating {} map(s) of {}x{}",
        count,
        config.map_dim(),
        config.map_dim()
    );

    let maps = generate_batch(&config, count)?;
    let first_id = store.next_id()?;

    for generated in &maps {
        let map_id = first_id + generated.index as u32;
        let path = store.save(map_id, &generated.map)?;

        tracing::info!("Map {} (seed {}): {}", map_id, generated.seed, path.display());
        for (tile, n) in generated.map.histogram() {
            tracing::info!("  {:?}: {}", tile, n);
        }
    }

    tracing::info!("Done! Wrote {} map(s) to {}", maps.len(), store.dir().display());

    Ok(())
}
