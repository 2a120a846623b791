//! Example: Print a top-down preview of a generated map.
//!
//! Each cell shows its surface tile:
//! `~` water, `.` sand, `,` meadow, `#` soil, `"` grass, `^` rock, `*` snow.
//!
//! Run with:
//! ```
//! cargo run -p worldmap --example preview_map
//! ```

use tracing_subscriber::EnvFilter;
use worldmap::prelude::*;

fn glyph(tile: Tile) -> char {
    match tile {
        Tile::Water => '~',
        Tile::Sand => '.',
        Tile::Meadow => ',',
        Tile::Soil => '#',
        Tile::Grass => '"',
        Tile::Rock => '^',
        Tile::Snow => '*',
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let builder = MapBuilder::new(MapConfig::default().with_exponent(5).with_seed(2024))?;
    let map = builder.build()?;

    for y in 0..map.height {
        let line: String = (0..map.width)
            .map(|x| map.surface_tile(x, y).map_or(' ', glyph))
            .collect();
        println!("{line}");
    }

    tracing::info!("Tiles: {}", map.tile_count());

    Ok(())
}
