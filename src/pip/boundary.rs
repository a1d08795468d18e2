//! Region boundary extraction from a GeoJSON feature collection.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use geo_types::{Coord, LineString, MultiPolygon, Polygon};
use geojson::{FeatureCollection, Value};
use tracing::{debug, info};

use crate::error::DatasetError;
use crate::geometry::Boundary;

/// Default feature property carrying the display name
pub const DEFAULT_NAME_PROPERTY: &str = "NAME_1";

/// A single region boundary with its display name
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBoundary {
    pub name: String,
    pub geometry: Boundary,
}

impl RegionBoundary {
    pub fn new(name: impl Into<String>, geometry: impl Into<Boundary>) -> Self {
        Self {
            name: name.into(),
            geometry: geometry.into(),
        }
    }

    /// Get the bounding box of this boundary
    pub fn bbox(&self) -> Option<(f64, f64, f64, f64)> {
        self.geometry.bbox()
    }
}

/// Read and parse the boundary dataset at `path`.
pub fn load_boundaries<P: AsRef<Path>>(
    path: P,
    name_property: &str,
) -> Result<Vec<RegionBoundary>, DatasetError> {
    let path = path.as_ref();
    info!("Loading region boundaries from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_boundaries(&content, name_property)
}

/// Parse a GeoJSON feature collection into boundaries, preserving feature order.
pub fn parse_boundaries(
    content: &str,
    name_property: &str,
) -> Result<Vec<RegionBoundary>, DatasetError> {
    let collection = FeatureCollection::from_str(content)?;

    let mut boundaries = Vec::with_capacity(collection.features.len());

    for (index, feature) in collection.features.into_iter().enumerate() {
        let name = feature
            .property(name_property)
            .and_then(|v| v.as_str())
            .ok_or_else(|| DatasetError::MissingName {
                index,
                property: name_property.to_string(),
            })?
            .to_string();

        let value = match feature.geometry {
            Some(geometry) => geometry.value,
            None => {
                return Err(DatasetError::UnsupportedGeometry {
                    name,
                    kind: "none".to_string(),
                })
            }
        };

        let geometry = match value {
            Value::Polygon(rings) => Boundary::Polygon(to_polygon(&name, &rings)?),
            Value::MultiPolygon(polygons) => {
                let parts = polygons
                    .iter()
                    .map(|rings| to_polygon(&name, rings))
                    .collect::<Result<Vec<_>, _>>()?;
                Boundary::MultiPolygon(MultiPolygon::new(parts))
            }
            other => {
                return Err(DatasetError::UnsupportedGeometry {
                    name,
                    kind: value_kind(&other).to_string(),
                })
            }
        };

        debug!("Feature {}: {} ({})", index, name, geometry.kind());
        boundaries.push(RegionBoundary { name, geometry });
    }

    info!("Found {} region boundaries", boundaries.len());

    Ok(boundaries)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Ring 0 becomes the exterior, the rest become holes
fn to_polygon(name: &str, rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>, DatasetError> {
    let mut rings = rings
        .iter()
        .map(|ring| to_ring(name, ring))
        .collect::<Result<Vec<_>, _>>()?;

    if rings.is_empty() {
        return Ok(Polygon::new(LineString::new(vec![]), vec![]));
    }

    let exterior = rings.remove(0);
    Ok(Polygon::new(exterior, rings))
}

fn to_ring(name: &str, positions: &[Vec<f64>]) -> Result<LineString<f64>, DatasetError> {
    positions
        .iter()
        .map(|p| match p.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(DatasetError::InvalidCoordinate {
                name: name.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::new)
}
