//! Isometric map data: one column of tiles per map cell.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use terrain::{Heightmap, Tile, tile};

use crate::error::{MapError, Result};

/// A single tile placed in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlacement {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub tile: Tile,
}

/// Tile columns for every map cell, addressed as `data[x][y][z]`.
///
/// A cell with height `h` holds `h + 1` tiles. The bottom tile is at `z = 0`,
/// and only the top one uses the peak variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub width: usize,
    pub height: usize,
    pub data: Vec<Vec<Vec<Tile>>>,
}

impl MapData {
    /// Stamps a tile column for every cell of the heightmap.
    pub fn from_heightmap(heightmap: &Heightmap) -> Self {
        let levels = heightmap.levels();
        let width = levels.dim();
        let height = levels.dim();

        let data = (0..width)
            .map(|x| {
                (0..height)
                    .map(|y| tile::column(levels[(x, y)]).collect())
                    .collect()
            })
            .collect();

        Self {
            width,
            height,
            data,
        }
    }

    /// Checks that `data` matches the declared size and no column is empty.
    pub fn validate(&self) -> Result<()> {
        if self.data.len() != self.width {
            return Err(MapError::MalformedMap(format!(
                "expected {} columns along x, found {}",
                self.width,
                self.data.len()
            )));
        }
        for (x, row) in self.data.iter().enumerate() {
            if row.len() != self.height {
                return Err(MapError::MalformedMap(format!(
                    "expected {} columns at x={x}, found {}",
                    self.height,
                    row.len()
                )));
            }
            if let Some(y) = row.iter().position(Vec::is_empty) {
                return Err(MapError::MalformedMap(format!("empty column at ({x}, {y})")));
            }
        }
        Ok(())
    }

    pub fn column(&self, x: usize, y: usize) -> Option<&[Tile]> {
        self.data.get(x)?.get(y).map(Vec::as_slice)
    }

    /// Number of stacked tiles at `(x, y)`, 0 outside the map.
    pub fn tall(&self, x: usize, y: usize) -> usize {
        self.column(x, y).map_or(0, <[Tile]>::len)
    }

    pub fn tile_at(&self, x: usize, y: usize, z: usize) -> Option<Tile> {
        self.column(x, y)?.get(z).copied()
    }

    /// The topmost tile at `(x, y)`.
    pub fn surface_tile(&self, x: usize, y: usize) -> Option<Tile> {
        self.column(x, y)?.last().copied()
    }

    pub fn tile_count(&self) -> usize {
        self.data.iter().flatten().map(Vec::len).sum()
    }

    /// Every tile in the map, ordered by x, then y, then z.
    pub fn tiles(&self) -> impl Iterator<Item = TilePlacement> + '_ {
        self.data.iter().enumerate().flat_map(|(x, row)| {
            row.iter().enumerate().flat_map(move |(y, column)| {
                column
                    .iter()
                    .enumerate()
                    .map(move |(z, &tile)| TilePlacement { x, y, z, tile })
            })
        })
    }

    /// Tile counts per category.
    pub fn histogram(&self) -> BTreeMap<Tile, usize> {
        let mut counts = BTreeMap::new();
        for placement in self.tiles() {
            *counts.entry(placement.tile).or_insert(0) += 1;
        }
        counts
    }
}
