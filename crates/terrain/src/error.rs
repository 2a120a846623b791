use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    #[error("Invalid dimension {0}: expected 2^k + 1 with k >= 1")]
    InvalidDimension(usize),

    #[error("Invalid max height {0}: expected a finite value greater than zero")]
    InvalidMaxHeight(f64),

    #[error("Invalid height {0}: heights must be non-negative")]
    InvalidHeight(i64),
}

pub type Result<T> = std::result::Result<T, TerrainError>;
