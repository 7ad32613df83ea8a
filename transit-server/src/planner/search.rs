//! Journey assembly.
//!
//! For every pair of candidate stops around the two query coordinates, the
//! planner collects direct and one-change candidates from the route graph,
//! attaches the next catchable vehicle to each leg, expands legs into hops,
//! and ranks the surviving journeys by total time.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::domain::{
    Position, RouteJourney, RouteSegment, ScheduleTime, Stop, TransferSegments, VehicleTime,
};
use crate::network::TransitNetwork;

use super::config::PlannerConfig;
use super::rank::rank_and_truncate;

/// Request for journey planning.
#[derive(Debug, Clone, Copy)]
pub struct PlanRequest {
    /// Where the journey starts.
    pub origin: Position,

    /// Where the journey ends.
    pub destination: Position,

    /// The query instant; every candidate is timed against it.
    pub departure: ScheduleTime,
}

impl PlanRequest {
    pub fn new(origin: Position, destination: Position, departure: ScheduleTime) -> Self {
        Self {
            origin,
            destination,
            departure,
        }
    }
}

/// Result of journey planning.
#[derive(Debug, Clone, Default)]
pub struct PlanResult {
    /// Found journeys, fastest first.
    pub journeys: Vec<RouteJourney>,

    /// Number of coarse direct and transfer candidates evaluated.
    pub candidates_considered: usize,

    /// Whether the planning budget ran out before all stop pairs were tried.
    pub timed_out: bool,
}

impl PlanResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One leg resolved against the timetable.
struct Ride {
    vehicle: VehicleTime,
    arrival: ScheduleTime,
    hops: Vec<RouteSegment>,
}

/// Journey planner over a shared network.
pub struct JourneyPlanner<'a> {
    network: &'a TransitNetwork,
    config: &'a PlannerConfig,
}

impl<'a> JourneyPlanner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a TransitNetwork, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Plan journeys between two coordinates.
    pub fn plan(&self, request: &PlanRequest) -> PlanResult {
        let origins = self
            .network
            .index
            .nearest_stops(&request.origin, self.config.max_stops);
        let destinations = self
            .network
            .index
            .nearest_stops(&request.destination, self.config.max_stops);

        debug!(
            origins = origins.len(),
            destinations = destinations.len(),
            departure = %request.departure,
            "resolved candidate stops"
        );

        self.plan_between(&origins, &destinations, request.departure)
    }

    /// Plan journeys between explicit candidate stop lists.
    ///
    /// Every (origin, destination) pair is tried in list order; journeys are
    /// only kept once every leg has resolved.
    pub fn plan_between(
        &self,
        origins: &[Arc<Stop>],
        destinations: &[Arc<Stop>],
        departure: ScheduleTime,
    ) -> PlanResult {
        let started = Instant::now();
        let mut result = PlanResult::empty();
        let mut journeys = Vec::new();

        'pairs: for from in origins {
            for to in destinations {
                if self
                    .config
                    .max_planning_time
                    .is_some_and(|limit| started.elapsed() >= limit)
                {
                    warn!(
                        limit = ?self.config.max_planning_time,
                        found = journeys.len(),
                        "planning budget exhausted, returning partial results"
                    );
                    result.timed_out = true;
                    break 'pairs;
                }

                for segment in self.network.graph.direct_segments(from, to) {
                    result.candidates_considered += 1;
                    if let Some(journey) = self.direct_journey(&segment, departure) {
                        journeys.push(journey);
                    }
                }

                let transfers = self
                    .network
                    .graph
                    .transfer_segments(from, to, &self.network.catalog);
                for transfer in &transfers {
                    result.candidates_considered += 1;
                    if let Some(journey) = self.transfer_journey(transfer, departure) {
                        journeys.push(journey);
                    }
                }
            }
        }

        debug!(
            candidates = result.candidates_considered,
            journeys = journeys.len(),
            "assembled journeys"
        );

        result.journeys = rank_and_truncate(journeys, self.config.max_journeys);
        result
    }

    /// A zero-change journey riding `segment`, if a vehicle can be caught.
    pub fn direct_journey(
        &self,
        segment: &RouteSegment,
        departure: ScheduleTime,
    ) -> Option<RouteJourney> {
        let ride = self.ride(segment, departure)?;
        let total_time = ride.arrival.abs_diff(departure);
        Some(RouteJourney::new(ride.hops, vec![ride.vehicle], total_time))
    }

    /// A one-change journey, if both legs can be caught in sequence.
    ///
    /// The second leg's vehicle must leave the interchange strictly after the
    /// first leg's vehicle arrives there.
    pub fn transfer_journey(
        &self,
        transfer: &TransferSegments,
        departure: ScheduleTime,
    ) -> Option<RouteJourney> {
        let first = self.ride(&transfer.outbound, departure)?;
        let second = self.ride(&transfer.inbound, first.arrival)?;

        let total_time = second.arrival.abs_diff(departure);
        let mut hops = first.hops;
        hops.extend(second.hops);

        Some(RouteJourney::new(
            hops,
            vec![first.vehicle, second.vehicle],
            total_time,
        ))
    }

    /// Resolve one leg: next vehicle after `after`, its arrival at the leg's
    /// end, and the hops ridden. Any miss rejects the leg.
    fn ride(&self, segment: &RouteSegment, after: ScheduleTime) -> Option<Ride> {
        let vehicle = self.network.inverted.nearest_vehicle(
            segment.from.name(),
            segment.route().as_str(),
            after,
        )?;
        let arrival = self
            .network
            .forward
            .arrival_time(vehicle.vehicle.as_str(), segment.to.name())?;

        let hops = self.network.lines.expand(segment);
        if hops.is_empty() {
            return None;
        }

        Some(Ride {
            vehicle: vehicle.clone(),
            arrival,
            hops,
        })
    }
}
