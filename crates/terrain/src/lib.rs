//! Procedural terrain heights for isometric maps.
//!
//! This crate builds square heightfields with the diamond-square
//! (midpoint displacement) algorithm and classifies heights into tile
//! categories.
//!
//! # Quick Start
//!
//! ```rust
//! use terrain::prelude::*;
//!
//! let params = GeneratorParams::from_exponent(6)
//!     .with_max_height(16.0)
//!     .discrete(true);
//! let map = generate(&params, &mut rand::thread_rng())?;
//!
//! let top = map.level(0, 0).unwrap();
//! let surface = Tile::for_level(top, true);
//! assert_eq!(map.dim(), 63);
//! # let _ = surface;
//! # Ok::<(), TerrainError>(())
//! ```

pub mod error;
pub mod generator;
pub mod grid;
pub mod random;
pub mod tile;

pub use error::{Result, TerrainError};
pub use generator::{GeneratorParams, Heightmap, generate};
pub use grid::Grid;
pub use random::{ConstantSource, RandomSource};
pub use tile::{Tile, classify};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::error::TerrainError;
    pub use crate::generator::{DAMPENING, GeneratorParams, Heightmap, generate};
    pub use crate::grid::Grid;
    pub use crate::random::{ConstantSource, RandomSource};
    pub use crate::tile::{Tile, classify, column};
}
