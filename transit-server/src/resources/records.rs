//! Snapshot record DTOs.
//!
//! These types map directly onto the JSON resource files. Field names follow
//! the files as produced by the data pipeline, which is why they mix
//! PascalCase, camelCase and snake_case.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::{
    DomainError, Position, RouteCode, RoutePath, ScheduleTime, Stop, VehicleId, VehicleTime,
};

/// A coordinate as stored in the snapshots.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// One entry of `stops.json`, also used for the stop lists in `routes.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopRecord {
    #[serde(rename = "StopPointName")]
    pub name: String,

    #[serde(rename = "Location")]
    pub location: LocationRecord,

    #[serde(rename = "LineRef", default)]
    pub line_ref: String,

    /// Index within the line.
    #[serde(rename = "Order", default)]
    pub order: f64,

    /// Distance to the next stop on the line.
    #[serde(rename = "nextDistance", default)]
    pub next_distance: f64,
}

impl StopRecord {
    /// Convert to a domain stop.
    pub fn into_stop(self) -> Result<Stop, DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::EmptyIdentifier { kind: "stop name" });
        }
        let position = Position::new(self.location.latitude, self.location.longitude)?;
        Ok(Stop::new(self.name, position, self.line_ref)
            .with_order(self.order)
            .with_next_distance(self.next_distance))
    }
}

/// One stored path between two stops of the route graph.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutePathRecord {
    pub route_code: String,

    #[serde(default)]
    pub distance: f64,
}

impl RoutePathRecord {
    pub fn into_path(self) -> Result<RoutePath, DomainError> {
        Ok(RoutePath::new(RouteCode::new(self.route_code)?, self.distance))
    }
}

/// A vehicle calling at a stop, as stored in `inverted-timetable.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleTimeRecord {
    /// Epoch milliseconds.
    #[serde(rename = "Time")]
    pub time: i64,

    #[serde(rename = "Vehicle")]
    pub vehicle: String,
}

impl VehicleTimeRecord {
    pub fn into_vehicle_time(self) -> Result<VehicleTime, DomainError> {
        Ok(VehicleTime::new(
            VehicleId::new(self.vehicle)?,
            ScheduleTime::from_millis(self.time),
        ))
    }
}

/// `stops.json`: a flat list of stops.
pub type StopsFile = Vec<StopRecord>;

/// `to-graph.json` and `from-graph.json`: stop → stop → paths.
pub type GraphFile = HashMap<String, HashMap<String, Vec<RoutePathRecord>>>;

/// `routes.json`: route code → ordered stops.
pub type RoutesFile = HashMap<String, Vec<StopRecord>>;

/// `timetable.json`: vehicle → stop → arrival epoch milliseconds.
pub type TimetableFile = HashMap<String, HashMap<String, i64>>;

/// `inverted-timetable.json`: route → stop → vehicles.
pub type InvertedTimetableFile = HashMap<String, HashMap<String, Vec<VehicleTimeRecord>>>;
