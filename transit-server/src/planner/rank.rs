//! Journey ranking for planning results.

use crate::domain::RouteJourney;

/// Rank journeys by total time, shortest first.
///
/// The sort is stable, so journeys with equal total time keep the order in
/// which they were assembled.
pub fn rank_journeys(mut journeys: Vec<RouteJourney>) -> Vec<RouteJourney> {
    journeys.sort_by_key(RouteJourney::total_time);
    journeys
}

/// Rank journeys and keep at most `max` of them.
pub fn rank_and_truncate(journeys: Vec<RouteJourney>, max: usize) -> Vec<RouteJourney> {
    let mut ranked = rank_journeys(journeys);
    ranked.truncate(max);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Position, RouteCode, RoutePath, RouteSegment, ScheduleTime, Stop, VehicleId, VehicleTime,
    };
    use std::sync::Arc;

    /// A one-hop journey tagged by vehicle id.
    fn journey(tag: &str, total_time: i64) -> RouteJourney {
        let stop = |n: &str| Arc::new(Stop::new(n, Position::new(0.0, 0.0).unwrap(), "L1"));
        let hop = RouteSegment::new(
            stop("A"),
            stop("B"),
            RoutePath::new(RouteCode::new("R1").unwrap(), 1.0),
        );
        let vehicle = VehicleTime::new(VehicleId::new(tag).unwrap(), ScheduleTime::from_millis(0));
        RouteJourney::new(vec![hop], vec![vehicle], total_time)
    }

    fn tags(journeys: &[RouteJourney]) -> Vec<&str> {
        journeys
            .iter()
            .map(|j| j.vehicles()[0].vehicle.as_str())
            .collect()
    }

    #[test]
    fn rank_by_total_time() {
        let ranked = rank_journeys(vec![
            journey("slow", 900),
            journey("fast", 100),
            journey("mid", 500),
        ]);
        assert_eq!(tags(&ranked), vec!["fast", "mid", "slow"]);
    }

    #[test]
    fn ties_keep_assembly_order() {
        let ranked = rank_journeys(vec![
            journey("a", 200),
            journey("b", 100),
            journey("c", 200),
            journey("d", 100),
        ]);
        assert_eq!(tags(&ranked), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn truncate_keeps_fastest() {
        let ranked = rank_and_truncate(
            vec![journey("a", 4), journey("b", 1), journey("c", 3), journey("d", 2)],
            2,
        );
        assert_eq!(tags(&ranked), vec!["b", "d"]);
    }

    #[test]
    fn truncate_under_cap_keeps_all() {
        let ranked = rank_and_truncate(vec![journey("a", 4), journey("b", 1)], 50);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(rank_and_truncate(Vec::new(), 10).is_empty());
    }
}
