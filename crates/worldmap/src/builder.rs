//! Builds map data from configuration.

use rand::SeedableRng;
use rand::rngs::StdRng;
use terrain::{Heightmap, RandomSource, generate};
use tracing::info;

use crate::config::MapConfig;
use crate::error::Result;
use crate::map::MapData;

/// Turns a [`MapConfig`] into heightmaps and tile columns.
///
/// # Example
///
/// ```rust,ignore
/// let map = MapBuilder::new(MapConfig::default().with_seed(12345))?.build()?;
/// println!("{} tiles", map.tile_count());
/// ```
#[derive(Debug, Clone)]
pub struct MapBuilder {
    config: MapConfig,
}

impl MapBuilder {
    /// Creates a builder after validating the config.
    pub fn new(config: MapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The sample map: a 63×63 map up to 16 layers tall.
    pub fn sample() -> Self {
        Self {
            config: MapConfig::default(),
        }
    }

    /// Generates the heightmap using the given random source.
    pub fn heightmap_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Heightmap> {
        Ok(generate(&self.config.generator_params(), rng)?)
    }

    /// Generates map data using the given random source.
    pub fn build_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<MapData> {
        let heightmap = self.heightmap_with(rng)?;
        let map = MapData::from_heightmap(&heightmap);

        info!(
            width = map.width,
            height = map.height,
            tiles = map.tile_count(),
            "Built map"
        );

        Ok(map)
    }

    /// Generates map data, seeded from the config when a seed is set.
    pub fn build(&self) -> Result<MapData> {
        match self.config.seed {
            Some(seed) => self.build_with(&mut StdRng::seed_from_u64(seed)),
            None => self.build_with(&mut rand::thread_rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapError;

    #[test]
    fn test_sample_map_shape() {
        let map = MapBuilder::sample().build().unwrap();
        assert_eq!(map.width, 63);
        assert_eq!(map.height, 63);
        for x in 0..map.width {
            for y in 0..map.height {
                let tall = map.tall(x, y);
                assert!((1..=17).contains(&tall), "column ({x}, {y}) has {tall} tiles");
            }
        }
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let builder = MapBuilder::new(MapConfig::default().with_exponent(4).with_seed(12345)).unwrap();
        assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    }

    #[test]
    fn test_build_with_matches_heightmap() {
        let builder = MapBuilder::new(MapConfig::default().with_exponent(3)).unwrap();
        let heightmap = builder.heightmap_with(&mut StdRng::seed_from_u64(5)).unwrap();
        let map = builder.build_with(&mut StdRng::seed_from_u64(5)).unwrap();

        for x in 0..map.width {
            for y in 0..map.height {
                let level = heightmap.level(x, y).unwrap() as usize;
                assert_eq!(map.tall(x, y), level + 1);
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = MapBuilder::new(MapConfig::default().with_exponent(0));
        assert!(matches!(result, Err(MapError::InvalidConfig(_))));
    }
}
