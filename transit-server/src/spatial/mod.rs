//! Spatial index for nearest-stop search.
//!
//! Stops are inserted into an R-tree as small tolerance-bounded rectangles
//! in `[lat, lng]` space. The tree only filters candidates: results are
//! re-sorted by great-circle distance before being returned, so the
//! rectangle approximation never decides the final order.

use std::collections::HashSet;
use std::sync::Arc;

use rstar::{AABB, Envelope, PointDistance, RTree, RTreeObject};

use crate::domain::{Position, Stop};

/// A stop as stored in the R-tree.
#[derive(Debug, Clone)]
struct IndexedStop {
    location: [f64; 2],
    tolerance: f64,
    stop: Arc<Stop>,
}

impl RTreeObject for IndexedStop {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let [lat, lng] = self.location;
        AABB::from_corners(
            [lat - self.tolerance, lng - self.tolerance],
            [lat + self.tolerance, lng + self.tolerance],
        )
    }
}

impl PointDistance for IndexedStop {
    /// Squared distance from `point` to the stop's rectangle (zero inside it).
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.envelope().distance_2(point)
    }
}

/// Nearest-stop lookup over a fixed set of stops.
#[derive(Debug)]
pub struct StopIndex {
    tree: RTree<IndexedStop>,
}

impl StopIndex {
    /// Bulk-load an index from stops.
    ///
    /// `tolerance` is the half-width, in degrees, of each stop's rectangle.
    pub fn build(stops: impl IntoIterator<Item = Arc<Stop>>, tolerance: f64) -> Self {
        let tolerance = tolerance.abs();
        let entries: Vec<IndexedStop> = stops
            .into_iter()
            .map(|stop| IndexedStop {
                location: stop.position().as_index_point(),
                tolerance,
                stop,
            })
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Find up to `k` distinct stops near `point`, closest first.
    ///
    /// The `k` nearest index entries are fetched, duplicates by stop name are
    /// dropped (first occurrence wins) and the survivors are ordered by
    /// haversine distance to `point`.
    pub fn nearest_stops(&self, point: &Position, k: usize) -> Vec<Arc<Stop>> {
        let query = point.as_index_point();
        let mut seen = HashSet::new();

        let mut stops: Vec<Arc<Stop>> = self
            .tree
            .nearest_neighbor_iter(&query)
            .take(k)
            .filter(|entry| seen.insert(entry.stop.name().to_string()))
            .map(|entry| entry.stop.clone())
            .collect();

        stops.sort_by(|a, b| a.distance_to(point).total_cmp(&b.distance_to(point)));
        stops
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
