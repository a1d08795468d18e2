//! Region-level types: compass axes, coordinates, union territory membership.

use geo_types::Coord;
use serde::{Deserialize, Serialize};

/// Union territories. Matched exactly and case-sensitively against feature names.
pub const UNION_TERRITORIES: &[&str] = &[
    "Andaman and Nicobar",
    "Chandigarh",
    "Dadra and Nagar Haveli",
    "Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// Exact string membership test
pub fn membership_contains(name: &str, set: &[&str]) -> bool {
    set.iter().any(|member| *member == name)
}

pub fn is_union_territory(name: &str) -> bool {
    membership_contains(name, UNION_TERRITORIES)
}

/// Compass axis used to order regions by centroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Ascending x (longitude)
    WestEast,
    /// Descending y (latitude)
    NorthSouth,
}

impl Axis {
    /// Route segment for this axis
    pub fn slug(&self) -> &'static str {
        match self {
            Axis::WestEast => "west-east",
            Axis::NorthSouth => "north-south",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "west-east" => Some(Axis::WestEast),
            "north-south" => Some(Axis::NorthSouth),
            _ => None,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Geographic point (lat/lon)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Planar coordinate with x = longitude, y = latitude
    pub fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(c: Coord<f64>) -> Self {
        Self { lat: c.y, lon: c.x }
    }
}
