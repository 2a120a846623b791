//! Height to tile classification.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};

/// Terrain tile categories, numbered by their tileset id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Tile {
    Water = 1,
    Sand = 2,
    /// Top of a column that stops at the plain level.
    Meadow = 3,
    Soil = 4,
    /// Top of a column in the hills.
    Grass = 5,
    Rock = 6,
    /// Top of a mountain column.
    Snow = 7,
}

impl Tile {
    pub const ALL: [Tile; 7] = [
        Tile::Water,
        Tile::Sand,
        Tile::Meadow,
        Tile::Soil,
        Tile::Grass,
        Tile::Rock,
        Tile::Snow,
    ];

    /// Picks the tile for layer `level` of a column.
    ///
    /// `is_peak` marks the topmost layer, which uses a surface variant from
    /// the plain level upward.
    pub fn for_level(level: u32, is_peak: bool) -> Tile {
        match (level, is_peak) {
            (0..2, _) => Tile::Water,
            (2..4, _) => Tile::Sand,
            (4, true) => Tile::Meadow,
            (4, false) => Tile::Soil,
            (5..10, true) => Tile::Grass,
            (5..10, false) => Tile::Soil,
            (10..14, _) => Tile::Rock,
            (_, true) => Tile::Snow,
            (_, false) => Tile::Rock,
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Tile> {
        Tile::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.id()
    }
}

impl TryFrom<u8> for Tile {
    type Error = String;

    fn try_from(id: u8) -> std::result::Result<Self, Self::Error> {
        Tile::from_id(id).ok_or_else(|| format!("unknown tile id {id}"))
    }
}

/// Classifies a signed height, rejecting negative values.
pub fn classify(height: i64, is_peak: bool) -> Result<Tile> {
    if height < 0 {
        return Err(TerrainError::InvalidHeight(height));
    }
    // everything past u32::MAX is in the top band anyway
    let level = u32::try_from(height).unwrap_or(u32::MAX);
    Ok(Tile::for_level(level, is_peak))
}

/// Tiles for a column whose topmost layer is `height`, bottom first.
pub fn column(height: u32) -> impl Iterator<Item = Tile> {
    (0..=height).map(move |z| Tile::for_level(z, z == height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(height: i64, is_peak: bool) -> u8 {
        classify(height, is_peak).unwrap().id()
    }

    #[test]
    fn test_boundary_cases() {
        assert_eq!(id(0, false), 1);
        assert_eq!(id(1, true), 1);
        assert_eq!(id(4, true), 3);
        assert_eq!(id(4, false), 4);
        assert_eq!(id(13, false), 6);
        assert_eq!(id(14, true), 7);
    }

    #[test]
    fn test_full_table() {
        let table: [(i64, u8, u8); 16] = [
            (0, 1, 1),
            (1, 1, 1),
            (2, 2, 2),
            (3, 2, 2),
            (4, 4, 3),
            (5, 4, 5),
            (7, 4, 5),
            (9, 4, 5),
            (10, 6, 6),
            (11, 6, 6),
            (13, 6, 6),
            (14, 6, 7),
            (15, 6, 7),
            (16, 6, 7),
            (100, 6, 7),
            (i64::from(u32::MAX) + 5, 6, 7),
        ];

        for (height, body, peak) in table {
            assert_eq!(id(height, false), body, "height {height} body");
            assert_eq!(id(height, true), peak, "height {height} peak");
        }
    }

    #[test]
    fn test_negative_height_rejected() {
        assert_eq!(classify(-1, false), Err(TerrainError::InvalidHeight(-1)));
        assert_eq!(classify(i64::MIN, true), Err(TerrainError::InvalidHeight(i64::MIN)));
    }

    #[test]
    fn test_column_marks_only_top_as_peak() {
        let tiles: Vec<u8> = column(5).map(Tile::id).collect();
        assert_eq!(tiles, vec![1, 1, 2, 2, 4, 5]);

        let tiles: Vec<u8> = column(0).map(Tile::id).collect();
        assert_eq!(tiles, vec![1]);
    }

    #[test]
    fn test_id_roundtrip() {
        for tile in Tile::ALL {
            assert_eq!(Tile::from_id(tile.id()), Some(tile));
        }
        assert_eq!(Tile::from_id(0), None);
        assert_eq!(Tile::from_id(8), None);
    }

    #[test]
    fn test_serializes_as_id() {
        assert_eq!(serde_json::to_string(&Tile::Snow).unwrap(), "7");
        let tile: Tile = serde_json::from_str("3").unwrap();
        assert_eq!(tile, Tile::Meadow);
        assert!(serde_json::from_str::<Tile>("9").is_err());
    }
}
