//! Route lines and segment expansion.
//!
//! A route line is the ordered list of stops a vehicle on that route visits.
//! Expansion turns a coarse "ride R from X to Y" segment into the single
//! hops between consecutive stops of R.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{RouteCode, RoutePath, RouteSegment, Stop};

/// Progress of a scan along a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// The boarding stop has not been seen yet.
    NotYetEntered,
    /// Riding: every hop is emitted.
    InSegment,
    /// The hop onto the alighting stop has been emitted.
    Done,
}

/// Canonical stop sequences, keyed by route code.
#[derive(Debug, Clone, Default)]
pub struct RouteLines {
    lines: HashMap<RouteCode, Vec<Arc<Stop>>>,
}

impl RouteLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stop sequence for `route`, replacing any previous one.
    pub fn insert(&mut self, route: RouteCode, stops: Vec<Stop>) {
        self.lines
            .insert(route, stops.into_iter().map(Arc::new).collect());
    }

    /// The stop sequence for `route`.
    pub fn stops(&self, route: &str) -> Option<&[Arc<Stop>]> {
        self.lines.get(route).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Expand a coarse segment into the hops a vehicle actually makes.
    ///
    /// Scanning starts at the first stop on the line named like the segment's
    /// boarding stop. Each hop carries the segment's route code and the
    /// distance from its origin stop to the next. The hop that lands on the
    /// alighting stop is the last one emitted.
    ///
    /// Returns an empty list when the route is unknown, when boarding and
    /// alighting stops are the same, or when the alighting stop does not
    /// follow the boarding stop on the line.
    pub fn expand(&self, segment: &RouteSegment) -> Vec<RouteSegment> {
        let Some(stops) = self.stops(segment.route().as_str()) else {
            return Vec::new();
        };
        let from = segment.from.name();
        let to = segment.to.name();
        if from == to {
            return Vec::new();
        }

        let mut state = ScanState::NotYetEntered;
        let mut hops = Vec::new();

        for pair in stops.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);

            if state == ScanState::NotYetEntered && current.name() == from {
                state = ScanState::InSegment;
            }
            if state != ScanState::InSegment {
                continue;
            }

            hops.push(RouteSegment::new(
                current.clone(),
                next.clone(),
                RoutePath::new(segment.route().clone(), current.next_distance()),
            ));

            if next.name() == to {
                state = ScanState::Done;
                break;
            }
        }

        match state {
            ScanState::Done => hops,
            ScanState::NotYetEntered | ScanState::InSegment => Vec::new(),
        }
    }
}
