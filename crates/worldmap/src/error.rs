use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Terrain error: {0}")]
    Terrain(#[from] terrain::TerrainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Malformed map data: {0}")]
    MalformedMap(String),

    #[error("Map id {0} is reserved for the sample map")]
    ReservedMapId(u32),

    #[error("Map {0} not found")]
    MapNotFound(u32),
}

pub type Result<T> = std::result::Result<T, MapError>;
