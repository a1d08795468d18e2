//! Planar geometry engine.
//!
//! Centroids and point containment on raw coordinate pairs. No projection or
//! geodesic correction is applied: x is longitude-like, y is latitude-like.

mod centroid;
mod contains;

use geo_types::{Coord, MultiPolygon, Polygon};

use crate::error::GeometryError;

pub use centroid::{compute_centroid, multi_polygon_centroid, signed_area};
pub use contains::{point_in_multi_polygon, point_in_polygon, point_in_ring};

/// Geometry of a single region: either one polygon or a set of disjoint parts.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundary {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl Boundary {
    /// Whether the filled area (holes excluded) contains `point`
    pub fn contains(&self, point: Coord<f64>) -> bool {
        match self {
            Boundary::Polygon(polygon) => point_in_polygon(polygon, point),
            Boundary::MultiPolygon(multi) => point_in_multi_polygon(multi, point),
        }
    }

    /// Centroid of the region's outer boundary.
    ///
    /// Multi-part regions get the area-weighted centroid of all parts' outer rings.
    pub fn centroid(&self) -> Result<Coord<f64>, GeometryError> {
        match self {
            Boundary::Polygon(polygon) => compute_centroid(polygon.exterior()),
            Boundary::MultiPolygon(multi) => multi_polygon_centroid(multi),
        }
    }

    /// Bounding box as (min_x, min_y, max_x, max_y)
    pub fn bbox(&self) -> Option<(f64, f64, f64, f64)> {
        use geo::BoundingRect;
        let rect = match self {
            Boundary::Polygon(polygon) => polygon.bounding_rect(),
            Boundary::MultiPolygon(multi) => multi.bounding_rect(),
        }?;
        Some((rect.min().x, rect.min().y, rect.max().x, rect.max().y))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Boundary::Polygon(_) => "Polygon",
            Boundary::MultiPolygon(_) => "MultiPolygon",
        }
    }
}

impl From<Polygon<f64>> for Boundary {
    fn from(polygon: Polygon<f64>) -> Self {
        Boundary::Polygon(polygon)
    }
}

impl From<MultiPolygon<f64>> for Boundary {
    fn from(multi: MultiPolygon<f64>) -> Self {
        Boundary::MultiPolygon(multi)
    }
}
