//! Sthana - state and union territory lookup over boundary polygons
//!
//! This library provides the geometry engine, region index and HTTP API used
//! by the server binary.

pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod models;
pub mod pip;

pub use error::{ConfigError, DatasetError, GeometryError};
pub use models::{Axis, GeoPoint};
pub use pip::{Locator, RegionIndex, RegionService};
