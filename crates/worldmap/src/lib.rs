//! Isometric map data built on generated terrain.
//!
//! This crate turns heightmaps from the `terrain` crate into stacked tile
//! columns, stores them as JSON, and generates batches of maps in parallel.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use worldmap::prelude::*;
//!
//! let builder = MapBuilder::new(MapConfig::default().with_seed(12345))?;
//! let store = MapStore::new("maps");
//!
//! let map = builder.build()?;
//! store.save(store.next_id()?, &map)?;
//! ```

pub mod batch;
pub mod builder;
pub mod config;
pub mod error;
pub mod map;
pub mod store;

pub use error::{MapError, Result};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::batch::{GeneratedMap, generate_batch};
    pub use crate::builder::MapBuilder;
    pub use crate::config::MapConfig;
    pub use crate::error::MapError;
    pub use crate::map::{MapData, TilePlacement};
    pub use crate::store::{MapStore, map_filename};
    pub use terrain::{Tile, classify};
}
