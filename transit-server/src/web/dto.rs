//! Data transfer objects for web responses.
//!
//! Field names are fixed by existing clients of the routes endpoint, hence
//! the mixed casing.

use serde::{Deserialize, Serialize};

use crate::domain::{Position, RouteJourney, RoutePath, RouteSegment, Stop, VehicleTime};

/// Response for journey planning.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    /// Journeys, fastest first
    pub journeys: Vec<JourneyResult>,
}

/// A journey option.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JourneyResult {
    /// Single hops in riding order
    pub segments: Vec<SegmentResult>,

    /// Sum of hop distances
    pub total_distance: f64,

    /// Milliseconds from the query instant to final arrival
    pub total_time: i64,

    /// Vehicle boarded for each leg
    pub vehicles: Vec<VehicleResult>,
}

/// One hop between consecutive stops.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SegmentResult {
    pub from_stop: StopResult,
    pub to_stop: StopResult,
    pub route_path: RoutePathResult,
}

/// A stop as sent to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct StopResult {
    #[serde(rename = "StopPointName")]
    pub name: String,

    #[serde(rename = "Location")]
    pub location: LocationResult,

    #[serde(rename = "LineRef")]
    pub line_ref: String,

    #[serde(rename = "Order")]
    pub order: f64,

    #[serde(rename = "nextDistance")]
    pub next_distance: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationResult {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoutePathResult {
    pub route_code: String,
    pub distance: f64,
}

/// A boarded vehicle and its departure from the boarding stop.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleResult {
    /// Epoch milliseconds
    pub time: i64,
    pub vehicle: String,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Conversion implementations

impl PlanResponse {
    pub fn from_journeys(journeys: &[RouteJourney]) -> Self {
        Self {
            journeys: journeys.iter().map(JourneyResult::from_journey).collect(),
        }
    }
}

impl JourneyResult {
    /// Convert a domain journey to a result DTO.
    pub fn from_journey(journey: &RouteJourney) -> Self {
        Self {
            segments: journey
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            total_distance: journey.total_distance(),
            total_time: journey.total_time(),
            vehicles: journey
                .vehicles()
                .iter()
                .map(VehicleResult::from_vehicle_time)
                .collect(),
        }
    }
}

impl SegmentResult {
    pub fn from_segment(segment: &RouteSegment) -> Self {
        Self {
            from_stop: StopResult::from_stop(&segment.from),
            to_stop: StopResult::from_stop(&segment.to),
            route_path: RoutePathResult::from_path(&segment.path),
        }
    }
}

impl StopResult {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            name: stop.name().to_string(),
            location: LocationResult::from_position(stop.position()),
            line_ref: stop.line_ref().to_string(),
            order: stop.order(),
            next_distance: stop.next_distance(),
        }
    }
}

impl LocationResult {
    pub fn from_position(position: Position) -> Self {
        Self {
            latitude: position.latitude(),
            longitude: position.longitude(),
        }
    }
}

impl RoutePathResult {
    pub fn from_path(path: &RoutePath) -> Self {
        Self {
            route_code: path.route.to_string(),
            distance: path.distance,
        }
    }
}

impl VehicleResult {
    pub fn from_vehicle_time(vehicle: &VehicleTime) -> Self {
        Self {
            time: vehicle.time.as_millis(),
            vehicle: vehicle.vehicle.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteCode, ScheduleTime, VehicleId};
    use std::sync::Arc;

    fn make_journey() -> RouteJourney {
        let p = Arc::new(
            Stop::new("P", Position::new(0.0, 0.0).unwrap(), "R1")
                .with_order(0.0)
                .with_next_distance(5.0),
        );
        let q = Arc::new(
            Stop::new("Q", Position::new(1.0, 1.0).unwrap(), "R1").with_order(1.0),
        );
        let hop = RouteSegment::new(p, q, RoutePath::new(RouteCode::new("R1").unwrap(), 5.0));
        let vehicle = VehicleTime::new(
            VehicleId::new("V1").unwrap(),
            ScheduleTime::from_millis(1000),
        );
        RouteJourney::new(vec![hop], vec![vehicle], 600)
    }

    #[test]
    fn journey_result_from_journey() {
        let result = JourneyResult::from_journey(&make_journey());

        assert_eq!(result.total_distance, 5.0);
        assert_eq!(result.total_time, 600);
        assert_eq!(result.segments.len(), 1);
        assert_eq!(result.segments[0].from_stop.name, "P");
        assert_eq!(result.segments[0].to_stop.name, "Q");
        assert_eq!(result.segments[0].route_path.route_code, "R1");
        assert_eq!(result.vehicles[0].vehicle, "V1");
        assert_eq!(result.vehicles[0].time, 1000);
    }

    #[test]
    fn wire_field_names() {
        let response = PlanResponse::from_journeys(&[make_journey()]);
        let json = serde_json::to_value(&response).unwrap();

        let journey = &json["journeys"][0];
        assert_eq!(journey["TotalDistance"], 5.0);
        assert_eq!(journey["TotalTime"], 600);
        assert_eq!(journey["Vehicles"][0]["Vehicle"], "V1");
        assert_eq!(journey["Vehicles"][0]["Time"], 1000);

        let segment = &journey["Segments"][0];
        assert_eq!(segment["FromStop"]["StopPointName"], "P");
        assert_eq!(segment["FromStop"]["Location"]["Latitude"], 0.0);
        assert_eq!(segment["FromStop"]["LineRef"], "R1");
        assert_eq!(segment["FromStop"]["nextDistance"], 5.0);
        assert_eq!(segment["ToStop"]["Order"], 1.0);
        assert_eq!(segment["RoutePath"]["route_code"], "R1");
        assert_eq!(segment["RoutePath"]["distance"], 5.0);
    }

    #[test]
    fn empty_plan_serializes_empty_list() {
        let json = serde_json::to_string(&PlanResponse::from_journeys(&[])).unwrap();
        assert_eq!(json, r#"{"journeys":[]}"#);
    }

    #[test]
    fn response_parses_back() {
        let json = serde_json::to_string(&PlanResponse::from_journeys(&[make_journey()])).unwrap();
        let parsed: PlanResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.journeys.len(), 1);
        assert_eq!(parsed.journeys[0].segments[0].to_stop.location.longitude, 1.0);
    }
}
