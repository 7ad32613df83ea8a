//! Route graph and segment discovery.
//!
//! Two adjacency maps describe which stops can be ridden between:
//!
//! - **forward**: `origin → destination → paths` ("from X, what can I reach")
//! - **reverse**: `destination → origin → paths` ("what can reach Y")
//!
//! Direct candidates come straight from the forward map. One-change
//! candidates intersect the forward neighbours of the origin with the reverse
//! neighbours of the destination over the shared intermediate stop.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::trace;

use crate::domain::{RoutePath, RouteSegment, Stop, TransferSegments};

use super::StopCatalog;

/// One direction of the route graph.
///
/// Inner maps are ordered by stop name so that iteration over neighbours
/// (and therefore transfer discovery) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    edges: HashMap<String, BTreeMap<String, Vec<RoutePath>>>,
}

impl Adjacency {
    /// Create an empty adjacency map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the candidates stored under `key → neighbour`.
    pub fn add(&mut self, key: impl Into<String>, neighbour: impl Into<String>, path: RoutePath) {
        self.edges
            .entry(key.into())
            .or_default()
            .entry(neighbour.into())
            .or_default()
            .push(path);
    }

    /// All neighbours of `key` with their paths, in name order.
    pub fn neighbours(&self, key: &str) -> Option<&BTreeMap<String, Vec<RoutePath>>> {
        self.edges.get(key)
    }

    /// Paths stored under `key → neighbour`; empty when either is unknown.
    pub fn paths(&self, key: &str, neighbour: &str) -> &[RoutePath] {
        self.edges
            .get(key)
            .and_then(|n| n.get(neighbour))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of stops with outgoing entries.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl FromIterator<(String, String, RoutePath)> for Adjacency {
    fn from_iter<I: IntoIterator<Item = (String, String, RoutePath)>>(iter: I) -> Self {
        let mut adjacency = Self::new();
        for (key, neighbour, path) in iter {
            adjacency.add(key, neighbour, path);
        }
        adjacency
    }
}

/// The forward and reverse route graphs.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    forward: Adjacency,
    reverse: Adjacency,
}

impl RouteGraph {
    pub fn new(forward: Adjacency, reverse: Adjacency) -> Self {
        Self { forward, reverse }
    }

    pub fn forward(&self) -> &Adjacency {
        &self.forward
    }

    pub fn reverse(&self) -> &Adjacency {
        &self.reverse
    }

    /// Zero-change candidates from `from` to `to`.
    ///
    /// One segment per stored path, with the path unchanged. A missing
    /// connection yields an empty list.
    pub fn direct_segments(&self, from: &Arc<Stop>, to: &Arc<Stop>) -> Vec<RouteSegment> {
        self.forward
            .paths(from.name(), to.name())
            .iter()
            .map(|path| RouteSegment::new(from.clone(), to.clone(), path.clone()))
            .collect()
    }

    /// One-change candidates from `from` to `to`.
    ///
    /// Every intermediate stop reachable from `from` that can also reach
    /// `to` contributes the cross product of its outbound and inbound paths,
    /// minus pairs that ride the same route twice. Intermediate stops missing
    /// from `catalog` are skipped. Results are ordered by intermediate stop
    /// name, then by stored path order.
    pub fn transfer_segments(
        &self,
        from: &Arc<Stop>,
        to: &Arc<Stop>,
        catalog: &StopCatalog,
    ) -> Vec<TransferSegments> {
        let mut transfers = Vec::new();

        let Some(outbound) = self.forward.neighbours(from.name()) else {
            return transfers;
        };
        let Some(inbound) = self.reverse.neighbours(to.name()) else {
            return transfers;
        };

        for (via_name, out_paths) in outbound {
            let Some(in_paths) = inbound.get(via_name) else {
                continue;
            };
            let Some(via) = catalog.get(via_name) else {
                trace!(stop = %via_name, "interchange missing from catalog");
                continue;
            };

            for out_path in out_paths {
                for in_path in in_paths {
                    if out_path.route == in_path.route {
                        continue;
                    }
                    transfers.push(TransferSegments {
                        outbound: RouteSegment::new(from.clone(), via.clone(), out_path.clone()),
                        inbound: RouteSegment::new(via.clone(), to.clone(), in_path.clone()),
                    });
                }
            }
        }

        transfers
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Position, RouteCode};
    use proptest::prelude::*;

    const STOPS: [&str; 5] = ["A", "B", "C", "D", "E"];
    const ROUTES: [&str; 3] = ["R1", "R2", "R3"];

    fn edges_strategy() -> impl Strategy<Value = Vec<(usize, usize, usize)>> {
        prop::collection::vec((0usize..5, 0usize..5, 0usize..3), 0..25)
    }

    proptest! {
        /// Transfer pairs never ride the same route on both legs, and always
        /// meet at the interchange.
        #[test]
        fn transfers_never_repeat_route(edges in edges_strategy(), from in 0usize..5, to in 0usize..5) {
            let catalog: StopCatalog = STOPS
                .iter()
                .map(|n| Stop::new(*n, Position::new(0.0, 0.0).unwrap(), "L1"))
                .collect();

            let mut forward = Adjacency::new();
            let mut reverse = Adjacency::new();
            for (a, b, r) in &edges {
                let p = RoutePath::new(RouteCode::new(ROUTES[*r]).unwrap(), 1.0);
                forward.add(STOPS[*a], STOPS[*b], p.clone());
                reverse.add(STOPS[*b], STOPS[*a], p);
            }
            let graph = RouteGraph::new(forward, reverse);

            let from = catalog.get(STOPS[from]).unwrap();
            let to = catalog.get(STOPS[to]).unwrap();

            for t in graph.transfer_segments(from, to, &catalog) {
                prop_assert_ne!(t.outbound.route(), t.inbound.route());
                prop_assert_eq!(t.outbound.to.name(), t.inbound.from.name());
                prop_assert_eq!(t.outbound.from.name(), from.name());
                prop_assert_eq!(t.inbound.to.name(), to.name());
            }

            // Direct candidates mirror the forward paths exactly
            let direct = graph.direct_segments(from, to);
            let stored = graph.forward().paths(from.name(), to.name());
            prop_assert_eq!(direct.len(), stored.len());
            for (segment, path) in direct.iter().zip(stored) {
                prop_assert_eq!(&segment.path, path);
            }
        }
    }
}
