//! Region index: names, union territory flags and centroids.

use std::cmp::Ordering;
use std::sync::Arc;

use geo_types::Coord;
use hashbrown::HashMap;
use rayon::prelude::*;
use tracing::{info, warn};

use super::boundary::RegionBoundary;
use crate::models::{is_union_territory, Axis};

/// A region with its precomputed attributes
#[derive(Debug, Clone)]
pub struct Region {
    pub boundary: Arc<RegionBoundary>,
    pub is_union_territory: bool,
    /// `None` when the boundary has no usable area
    pub centroid: Option<Coord<f64>>,
}

impl Region {
    pub fn name(&self) -> &str {
        &self.boundary.name
    }
}

/// Immutable index of regions in dataset order
#[derive(Debug, Default)]
pub struct RegionIndex {
    regions: Vec<Region>,
    by_name: HashMap<String, usize>,
}

impl RegionIndex {
    /// Build the index from boundaries, preserving their order.
    ///
    /// A region whose centroid cannot be computed is kept with no centroid.
    pub fn build(boundaries: &[Arc<RegionBoundary>]) -> Self {
        info!("Building region index for {} boundaries...", boundaries.len());

        let regions: Vec<Region> = boundaries
            .par_iter()
            .map(|boundary| {
                let centroid = match boundary.geometry.centroid() {
                    Ok(c) => Some(c),
                    Err(e) => {
                        warn!("No centroid for region '{}': {}", boundary.name, e);
                        None
                    }
                };
                Region {
                    boundary: Arc::clone(boundary),
                    is_union_territory: is_union_territory(&boundary.name),
                    centroid,
                }
            })
            .collect();

        let mut by_name = HashMap::with_capacity(regions.len());
        for (i, region) in regions.iter().enumerate() {
            if by_name.insert(region.name().to_string(), i).is_some() {
                warn!("Duplicate region name '{}'", region.name());
            }
        }

        let ut_count = regions.iter().filter(|r| r.is_union_territory).count();
        info!(
            "Region index built: {} states, {} union territories",
            regions.len() - ut_count,
            ut_count
        );

        Self { regions, by_name }
    }

    /// Names in dataset order, optionally including union territories
    pub fn list_names(&self, include_union_territories: bool) -> Vec<String> {
        self.filtered(include_union_territories)
            .map(|r| r.name().to_string())
            .collect()
    }

    /// Names ordered along `axis` by centroid.
    ///
    /// West to east sorts by ascending x, north to south by descending y.
    /// Ties keep dataset order; regions without a centroid come last.
    /// The index itself is left untouched.
    pub fn order_by(&self, axis: Axis, include_union_territories: bool) -> Vec<String> {
        let mut ordered: Vec<&Region> = self.filtered(include_union_territories).collect();

        ordered.sort_by(|a, b| match (a.centroid, b.centroid) {
            (Some(ca), Some(cb)) => match axis {
                Axis::WestEast => ca.x.total_cmp(&cb.x),
                Axis::NorthSouth => cb.y.total_cmp(&ca.y),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        ordered.into_iter().map(|r| r.name().to_string()).collect()
    }

    /// Look up a region by exact name
    pub fn get(&self, name: &str) -> Option<&Region> {
        self.by_name.get(name).map(|&i| &self.regions[i])
    }

    /// Get total number of indexed regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate over regions in dataset order
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    fn filtered(&self, include_union_territories: bool) -> impl Iterator<Item = &Region> {
        self.regions
            .iter()
            .filter(move |r| include_union_territories || !r.is_union_territory)
    }
}
