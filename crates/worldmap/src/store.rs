//! JSON map storage.
//!
//! Maps live in one directory as `IsometricMap001.json`, `IsometricMap002.json`
//! and so on. Map id 0 is reserved for the generated sample map and is never
//! read from disk.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::builder::MapBuilder;
use crate::error::{MapError, Result};
use crate::map::MapData;

const FILE_PREFIX: &str = "IsometricMap";
const FILE_SUFFIX: &str = ".json";

/// File name for a stored map id.
pub fn map_filename(map_id: u32) -> String {
    format!("{FILE_PREFIX}{map_id:03}{FILE_SUFFIX}")
}

fn parse_map_id(file_name: &str) -> Option<u32> {
    file_name
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_SUFFIX)?
        .parse()
        .ok()
}

/// Reads and writes map data under a single directory.
#[derive(Debug, Clone)]
pub struct MapStore {
    dir: PathBuf,
}

impl MapStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, map_id: u32) -> PathBuf {
        self.dir.join(map_filename(map_id))
    }

    /// Writes a map, replacing any existing file with the same id.
    pub fn save(&self, map_id: u32, map: &MapData) -> Result<PathBuf> {
        if map_id == 0 {
            return Err(MapError::ReservedMapId(map_id));
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(map_id);

        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, map)?;
        writer.flush()?;

        info!(map_id, path = %path.display(), tiles = map.tile_count(), "Saved map");
        Ok(path)
    }

    /// Reads a stored map and checks its shape.
    pub fn load(&self, map_id: u32) -> Result<MapData> {
        let path = self.path_for(map_id);
        if map_id == 0 || !path.is_file() {
            return Err(MapError::MapNotFound(map_id));
        }

        let map: MapData = serde_json::from_reader(BufReader::new(File::open(&path)?))?;
        map.validate()?;

        debug!(map_id, path = %path.display(), "Loaded map");
        Ok(map)
    }

    /// Loads a stored map, or builds the sample map when `map_id` is 0.
    pub fn load_or_sample(&self, map_id: u32, builder: &MapBuilder) -> Result<MapData> {
        if map_id == 0 {
            debug!("Building sample map");
            return builder.build();
        }
        self.load(map_id)
    }

    /// Ids of all stored maps, ascending. A missing directory holds no maps.
    pub fn list(&self) -> Result<Vec<u32>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if let Some(id) = entry.file_name().to_str().and_then(parse_map_id) {
                if id > 0 {
                    ids.push(id);
                }
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }

    /// The id one past the highest stored map.
    pub fn next_id(&self) -> Result<u32> {
        Ok(self.list()?.last().map_or(1, |id| id + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;

    fn small_builder() -> MapBuilder {
        MapBuilder::new(MapConfig::default().with_exponent(3).with_seed(99)).unwrap()
    }

    #[test]
    fn test_filename() {
        assert_eq!(map_filename(1), "IsometricMap001.json");
        assert_eq!(map_filename(1234), "IsometricMap1234.json");
        assert_eq!(parse_map_id("IsometricMap042.json"), Some(42));
        assert_eq!(parse_map_id("IsometricMap042.txt"), None);
        assert_eq!(parse_map_id("notes.json"), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapStore::new(dir.path());
        let map = small_builder().build().unwrap();

        let path = store.save(3, &map).unwrap();
        assert!(path.ends_with("IsometricMap003.json"));
        assert_eq!(store.load(3).unwrap(), map);
    }

    #[test]
    fn test_missing_map() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapStore::new(dir.path());
        assert!(matches!(store.load(7), Err(MapError::MapNotFound(7))));
    }

    #[test]
    fn test_map_zero_is_sample() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapStore::new(dir.path());
        let builder = small_builder();

        assert!(matches!(
            store.save(0, &builder.build().unwrap()),
            Err(MapError::ReservedMapId(0))
        ));
        assert!(matches!(store.load(0), Err(MapError::MapNotFound(0))));

        let sample = store.load_or_sample(0, &builder).unwrap();
        assert_eq!(sample, builder.build().unwrap());
    }

    #[test]
    fn test_list_and_next_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapStore::new(dir.path().join("maps"));
        assert_eq!(store.list().unwrap(), Vec::<u32>::new());
        assert_eq!(store.next_id().unwrap(), 1);

        let map = small_builder().build().unwrap();
        store.save(2, &map).unwrap();
        store.save(10, &map).unwrap();
        std::fs::write(store.dir().join("readme.txt"), "not a map").unwrap();

        assert_eq!(store.list().unwrap(), vec![2, 10]);
        assert_eq!(store.next_id().unwrap(), 11);
    }

    #[test]
    fn test_load_rejects_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapStore::new(dir.path());
        std::fs::write(
            store.path_for(4),
            r#"{"width": 2, "height": 1, "data": [[[1]]]}"#,
        )
        .unwrap();

        assert!(matches!(store.load(4), Err(MapError::MalformedMap(_))));
    }
}
