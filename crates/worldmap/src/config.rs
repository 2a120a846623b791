//! Configuration types for map generation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use terrain::GeneratorParams;

use crate::error::{MapError, Result};

/// Largest supported grid exponent. A 2^12 + 1 grid already holds ~16.8M cells.
pub const MAX_EXPONENT: u32 = 12;

/// Tallest allowed column. Every map cell stores one tile per layer.
pub const MAX_COLUMN_HEIGHT: f64 = 256.0;

/// Configuration for building maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Working grid side is `2^exponent + 1`; maps are two cells narrower.
    pub exponent: u32,

    /// Height of the tallest possible column.
    pub max_height: f64,

    /// Floor heights to whole layers. Tile columns need this.
    pub discrete: bool,

    /// Seed for reproducible maps. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            exponent: 6,
            max_height: 16.0,
            discrete: true,
            seed: None,
        }
    }
}

impl MapConfig {
    /// Loads and validates a config from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: MapConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the grid exponent.
    pub fn with_exponent(mut self, exponent: u32) -> Self {
        self.exponent = exponent;
        self
    }

    /// Sets the maximum column height.
    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = max_height;
        self
    }

    /// Side of the working grid.
    pub fn dim(&self) -> usize {
        (1usize << self.exponent.min(MAX_EXPONENT)) + 1
    }

    /// Side of the resulting map.
    pub fn map_dim(&self) -> usize {
        self.dim() - 2
    }

    pub fn generator_params(&self) -> GeneratorParams {
        GeneratorParams::new(self.dim())
            .with_max_height(self.max_height)
            .discrete(self.discrete)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_EXPONENT).contains(&self.exponent) {
            return Err(MapError::InvalidConfig(format!(
                "exponent must be between 1 and {MAX_EXPONENT}, got {}",
                self.exponent
            )));
        }
        self.generator_params().validate()?;
        if self.max_height > MAX_COLUMN_HEIGHT {
            return Err(MapError::InvalidConfig(format!(
                "max_height must be at most {MAX_COLUMN_HEIGHT}, got {}",
                self.max_height
            )));
        }
        Ok(())
    }
}
