//! Point to region resolution.

use std::sync::Arc;

use geo_types::Coord;
use rstar::{RTree, RTreeObject, AABB};
use tracing::{debug, info};

use super::RegionBoundary;

/// Wrapper for R-tree indexing of region boundaries
#[derive(Clone)]
struct IndexedBoundary {
    /// Position in the dataset, used to keep first-match order
    position: usize,
    boundary: Arc<RegionBoundary>,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedBoundary {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl IndexedBoundary {
    fn new(position: usize, boundary: Arc<RegionBoundary>) -> Option<Self> {
        let (min_x, min_y, max_x, max_y) = boundary.bbox()?;
        Some(Self {
            position,
            boundary,
            envelope: AABB::from_corners([min_x, min_y], [max_x, max_y]),
        })
    }
}

/// Resolves points to the first containing region in dataset order.
///
/// Envelopes only prune candidates; every candidate is tested exactly and the
/// one earliest in the dataset wins, so overlapping boundaries resolve the
/// same way a full linear scan would.
pub struct Locator {
    tree: RTree<IndexedBoundary>,
}

impl Locator {
    pub fn new(boundaries: &[Arc<RegionBoundary>]) -> Self {
        // Boundaries without an envelope have no points and can never match
        let indexed: Vec<IndexedBoundary> = boundaries
            .iter()
            .enumerate()
            .filter_map(|(i, b)| IndexedBoundary::new(i, Arc::clone(b)))
            .collect();

        let tree = RTree::bulk_load(indexed);
        info!("Locator built with {} boundaries", tree.size());

        Self { tree }
    }

    /// Name of the first region containing `point`, if any
    pub fn resolve(&self, point: Coord<f64>) -> Option<&str> {
        let query_envelope = AABB::from_point([point.x, point.y]);

        let found = self
            .tree
            .locate_in_envelope_intersecting(&query_envelope)
            .filter(|ib| ib.boundary.geometry.contains(point))
            .min_by_key(|ib| ib.position)
            .map(|ib| ib.boundary.name.as_str());

        debug!("Resolved ({}, {}) to {:?}", point.x, point.y, found);
        found
    }

    /// Resolve a latitude/longitude pair (x = longitude, y = latitude)
    pub fn resolve_lat_lon(&self, lat: f64, lon: f64) -> Option<&str> {
        self.resolve(Coord { x: lon, y: lat })
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
