//! Error types shared across the library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a geometric computation on a single ring or region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Ring has zero area (too few distinct points, collinear, or non-finite input).
    #[error("degenerate geometry: ring of {points} points has no area")]
    Degenerate { points: usize },
}

/// Failure to read or interpret the boundary dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read boundary dataset {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse boundary dataset: {0}")]
    Parse(#[from] geojson::Error),

    /// Feature lacks the configured display name property.
    #[error("feature {index} has no string property '{property}'")]
    MissingName { index: usize, property: String },

    #[error("feature '{name}' has unsupported geometry: {kind}")]
    UnsupportedGeometry { name: String, kind: String },

    #[error("feature '{name}' has a coordinate with fewer than 2 values")]
    InvalidCoordinate { name: String },
}

/// Failure to load the service configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
