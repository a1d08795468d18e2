//! Point-in-Polygon (PIP) region lookup.
//!
//! Loads region boundaries from GeoJSON, precomputes centroids for ordering,
//! and resolves points to the region containing them.

mod boundary;
mod index;
mod locator;
mod service;

pub use boundary::{load_boundaries, parse_boundaries, RegionBoundary, DEFAULT_NAME_PROPERTY};
pub use index::{Region, RegionIndex};
pub use locator::Locator;
pub use service::RegionService;
