//! The static transit network.
//!
//! Everything the planner reads is bundled into a [`TransitNetwork`], built
//! once at startup and shared read-only across requests.

mod catalog;
mod graph;
mod lines;

pub use catalog::StopCatalog;
pub use graph::{Adjacency, RouteGraph};
pub use lines::RouteLines;

use crate::spatial::StopIndex;
use crate::timetable::{ForwardTimetable, InvertedTimetable};

/// All immutable lookup structures needed for planning.
#[derive(Debug)]
pub struct TransitNetwork {
    pub catalog: StopCatalog,
    pub index: StopIndex,
    pub graph: RouteGraph,
    pub lines: RouteLines,
    pub inverted: InvertedTimetable,
    pub forward: ForwardTimetable,
}

impl TransitNetwork {
    /// Assemble a network, building the spatial index over the catalog.
    pub fn new(
        catalog: StopCatalog,
        graph: RouteGraph,
        lines: RouteLines,
        inverted: InvertedTimetable,
        forward: ForwardTimetable,
        index_tolerance: f64,
    ) -> Self {
        let index = StopIndex::build(catalog.stops().cloned(), index_tolerance);
        Self {
            catalog,
            index,
            graph,
            lines,
            inverted,
            forward,
        }
    }
}
