//! Query point sets: where reconstructed and regridded fields are evaluated.
//!
//! The grid collaborator hands over plain coordinate arrays (mesh nodes,
//! element centroids, or arbitrary observation sites); this type pins down
//! the pairing invariant once so every downstream loop can zip blindly.

use serde::{Deserialize, Serialize};

use crate::core_types::units::Degrees;
use crate::error::{ForcingError, Result};

/// An ordered, immutable set of `(lon, lat)` evaluation locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryPointSet {
    lon: Vec<f64>,
    lat: Vec<f64>,
}

impl QueryPointSet {
    /// Build from paired coordinate arrays in degrees.
    ///
    /// Fails with [`ForcingError::MismatchedLengths`] when the arrays differ
    /// in length or are empty.
    pub fn from_points(lon: Vec<f64>, lat: Vec<f64>) -> Result<Self> {
        if lon.len() != lat.len() || lon.is_empty() {
            return Err(ForcingError::MismatchedLengths {
                context: "query point coordinates",
                left: lon.len(),
                right: lat.len(),
            });
        }
        Ok(QueryPointSet { lon, lat })
    }

    /// Evaluation set at unstructured-mesh node positions (scalar fields such
    /// as surface pressure live on nodes).
    pub fn from_mesh_nodes(node_lon: Vec<f64>, node_lat: Vec<f64>) -> Result<Self> {
        Self::from_points(node_lon, node_lat)
    }

    /// Evaluation set at element centroid positions (wind components live on
    /// element centers).
    pub fn from_element_centroids(elem_lon: Vec<f64>, elem_lat: Vec<f64>) -> Result<Self> {
        Self::from_points(elem_lon, elem_lat)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lon.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lon.is_empty()
    }

    #[must_use]
    pub fn lon(&self) -> &[f64] {
        &self.lon
    }

    #[must_use]
    pub fn lat(&self) -> &[f64] {
        &self.lat
    }

    /// Point at `index` as typed degrees.
    #[must_use]
    pub fn point(&self, index: usize) -> (Degrees, Degrees) {
        (Degrees::new(self.lon[index]), Degrees::new(self.lat[index]))
    }

    /// Iterate `(lon, lat)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.lon.iter().copied().zip(self.lat.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let result = QueryPointSet::from_points(vec![130.0, 131.0], vec![20.0]);
        assert!(matches!(
            result,
            Err(ForcingError::MismatchedLengths {
                left: 2,
                right: 1,
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_set() {
        assert!(QueryPointSet::from_points(vec![], vec![]).is_err());
    }

    #[test]
    fn preserves_point_order() {
        let set = QueryPointSet::from_points(vec![130.0, 131.0], vec![20.0, 21.0]).unwrap();
        assert_eq!(set.len(), 2);
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(pairs, vec![(130.0, 20.0), (131.0, 21.0)]);
        assert_eq!(set.point(1), (Degrees::new(131.0), Degrees::new(21.0)));
    }
}
