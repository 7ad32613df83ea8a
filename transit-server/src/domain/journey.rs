//! Journey types.
//!
//! A `RouteJourney` is a complete trip between two stops: the single-hop
//! segments ridden, the vehicles boarded and the aggregate distance and time.

use super::{RouteSegment, VehicleTime};

/// A planned journey.
///
/// Direct journeys board one vehicle; transfer journeys board two. The hop
/// list is the concatenation of every leg's expanded hops.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteJourney {
    segments: Vec<RouteSegment>,
    total_distance: f64,
    total_time: i64,
    vehicles: Vec<VehicleTime>,
}

impl RouteJourney {
    /// Build a journey; the total distance is the sum of the hop distances.
    ///
    /// `total_time` is the journey duration in timetable units (milliseconds).
    pub fn new(segments: Vec<RouteSegment>, vehicles: Vec<VehicleTime>, total_time: i64) -> Self {
        let total_distance: f64 = segments.iter().map(RouteSegment::distance).sum();
        Self {
            segments,
            total_distance,
            total_time,
            vehicles,
        }
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn total_time(&self) -> i64 {
        self.total_time
    }

    pub fn vehicles(&self) -> &[VehicleTime] {
        &self.vehicles
    }

    /// Number of vehicle changes (0 for a direct journey).
    pub fn change_count(&self) -> usize {
        self.vehicles.len().saturating_sub(1)
    }
}
