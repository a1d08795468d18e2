//! Region service combining the index and the locator.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use super::{load_boundaries, Locator, RegionBoundary, RegionIndex};
use crate::config::LoadPolicy;
use crate::error::DatasetError;
use crate::models::{Axis, GeoPoint};

/// Read-only view over one boundary dataset
pub struct RegionService {
    index: RegionIndex,
    locator: Locator,
}

impl RegionService {
    /// Build the index and locator over the same boundaries
    pub fn new(boundaries: Vec<RegionBoundary>) -> Self {
        let shared: Vec<Arc<RegionBoundary>> = boundaries.into_iter().map(Arc::new).collect();
        Self {
            index: RegionIndex::build(&shared),
            locator: Locator::new(&shared),
        }
    }

    /// Load the dataset at `path`.
    ///
    /// With [`LoadPolicy::DegradeToEmpty`] a load failure is logged and an
    /// empty service is returned instead.
    pub fn load<P: AsRef<Path>>(
        path: P,
        name_property: &str,
        policy: LoadPolicy,
    ) -> Result<Self, DatasetError> {
        match load_boundaries(path, name_property) {
            Ok(boundaries) => Ok(Self::new(boundaries)),
            Err(e) => match policy {
                LoadPolicy::FailFast => Err(e),
                LoadPolicy::DegradeToEmpty => {
                    error!("Boundary dataset unavailable, serving empty results: {}", e);
                    Ok(Self::empty())
                }
            },
        }
    }

    pub fn empty() -> Self {
        info!("Starting with an empty region index");
        Self::new(Vec::new())
    }

    pub fn list_names(&self, include_union_territories: bool) -> Vec<String> {
        self.index.list_names(include_union_territories)
    }

    pub fn order_by(&self, axis: Axis, include_union_territories: bool) -> Vec<String> {
        self.index.order_by(axis, include_union_territories)
    }

    /// Region containing the given location, if any
    pub fn locate(&self, location: GeoPoint) -> Option<&str> {
        self.locator.resolve(location.to_coord())
    }

    /// Get the region index (for listing and stats)
    pub fn index(&self) -> &RegionIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_service() {
        let service = RegionService::empty();
        assert!(service.index().is_empty());
        assert!(service.list_names(true).is_empty());
        assert!(service.order_by(Axis::WestEast, false).is_empty());
        assert_eq!(service.locate(GeoPoint::new(28.6, 77.2)), None);
    }

    #[test]
    fn test_load_policy() {
        let missing = "/nonexistent/IndianStates.json";
        assert!(matches!(
            RegionService::load(missing, "NAME_1", LoadPolicy::FailFast),
            Err(DatasetError::Io { .. })
        ));

        let service = RegionService::load(missing, "NAME_1", LoadPolicy::DegradeToEmpty).unwrap();
        assert!(service.index().is_empty());
    }
}
