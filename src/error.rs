//! Crate error type.

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("not a permutation: {0}")]
    NotAPermutation(String),
    #[error("tour has {tour} stops but the distance matrix covers {matrix} points")]
    SizeMismatch { tour: usize, matrix: usize },
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),
    #[error("invalid coordinate at index {index}: lat={lat}, lon={lon}")]
    InvalidCoordinate { index: usize, lat: f64, lon: f64 },
    #[cfg(feature = "geojson")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn not_a_permutation(message: impl Into<String>) -> Self {
        Self::NotAPermutation(message.into())
    }

    pub fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix(message.into())
    }
}
