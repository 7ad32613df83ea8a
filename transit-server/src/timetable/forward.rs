//! Forward timetable: vehicle → stop → scheduled arrival.

use std::collections::HashMap;

use crate::domain::{ScheduleTime, VehicleId};

/// Scheduled arrival of each vehicle at each stop it serves.
#[derive(Debug, Clone, Default)]
pub struct ForwardTimetable {
    arrivals: HashMap<VehicleId, HashMap<String, ScheduleTime>>,
}

impl ForwardTimetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `vehicle` arriving at `stop` at `time`, replacing any earlier entry.
    pub fn add(&mut self, vehicle: VehicleId, stop: impl Into<String>, time: ScheduleTime) {
        self.arrivals
            .entry(vehicle)
            .or_default()
            .insert(stop.into(), time);
    }

    /// When `vehicle` is scheduled to arrive at `stop`.
    pub fn arrival_time(&self, vehicle: &str, stop: &str) -> Option<ScheduleTime> {
        self.arrivals.get(vehicle)?.get(stop).copied()
    }

    /// Number of vehicles with at least one arrival.
    pub fn vehicle_count(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}
