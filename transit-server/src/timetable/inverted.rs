//! Inverted timetable: route → stop → vehicles in time order.
//!
//! Each `(route, stop)` sequence is sorted once when the timetable is built
//! and never touched again; lookups binary-search it.

use std::collections::HashMap;

use crate::domain::{RouteCode, ScheduleTime, VehicleTime};

type StopVehicles = HashMap<String, Vec<VehicleTime>>;

/// Vehicles calling at each stop of each route, ascending by time.
#[derive(Debug, Clone, Default)]
pub struct InvertedTimetable {
    routes: HashMap<RouteCode, StopVehicles>,
}

impl InvertedTimetable {
    /// The first vehicle on `route` at `stop` strictly after `after`.
    ///
    /// Returns `None` when the route or stop is unknown, or when nothing is
    /// scheduled after `after`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_server::domain::{RouteCode, ScheduleTime, VehicleId, VehicleTime};
    /// use transit_server::timetable::InvertedTimetableBuilder;
    ///
    /// let route = RouteCode::new("R1").unwrap();
    /// let mut builder = InvertedTimetableBuilder::new();
    /// for (id, t) in [("V3", 300), ("V1", 100), ("V2", 200)] {
    ///     let vt = VehicleTime::new(VehicleId::new(id).unwrap(), ScheduleTime::from_millis(t));
    ///     builder.add(route.clone(), "P", vt);
    /// }
    /// let table = builder.build();
    ///
    /// let at = ScheduleTime::from_millis;
    /// assert_eq!(table.nearest_vehicle("P", "R1", at(150)).unwrap().vehicle.as_str(), "V2");
    /// assert_eq!(table.nearest_vehicle("P", "R1", at(50)).unwrap().vehicle.as_str(), "V1");
    /// assert!(table.nearest_vehicle("P", "R1", at(300)).is_none());
    /// ```
    pub fn nearest_vehicle(
        &self,
        stop: &str,
        route: &str,
        after: ScheduleTime,
    ) -> Option<&VehicleTime> {
        let vehicles = self.routes.get(route)?.get(stop)?;
        let idx = vehicles.partition_point(|vt| vt.time <= after);
        vehicles.get(idx)
    }

    /// All vehicles on `route` at `stop`, ascending by time.
    pub fn vehicles_at(&self, stop: &str, route: &str) -> &[VehicleTime] {
        self.routes
            .get(route)
            .and_then(|stops| stops.get(stop))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of routes with at least one entry.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Collects unsorted entries and produces a sorted [`InvertedTimetable`].
#[derive(Debug, Default)]
pub struct InvertedTimetableBuilder {
    routes: HashMap<RouteCode, StopVehicles>,
}

impl InvertedTimetableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one vehicle event in any order.
    pub fn add(&mut self, route: RouteCode, stop: impl Into<String>, vehicle: VehicleTime) {
        self.routes
            .entry(route)
            .or_default()
            .entry(stop.into())
            .or_default()
            .push(vehicle);
    }

    /// Add a whole `(route, stop)` sequence in any order.
    pub fn extend(
        &mut self,
        route: RouteCode,
        stop: impl Into<String>,
        vehicles: impl IntoIterator<Item = VehicleTime>,
    ) {
        self.routes
            .entry(route)
            .or_default()
            .entry(stop.into())
            .or_default()
            .extend(vehicles);
    }

    /// Sort every sequence by time and freeze the result.
    ///
    /// The sort is stable: vehicles sharing a time keep insertion order.
    pub fn build(mut self) -> InvertedTimetable {
        for stops in self.routes.values_mut() {
            for vehicles in stops.values_mut() {
                vehicles.sort_by_key(|vt| vt.time);
            }
        }
        InvertedTimetable {
            routes: self.routes,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::VehicleId;
    use proptest::prelude::*;

    proptest! {
        /// nearest_vehicle agrees with a linear scan for the minimum time
        /// strictly greater than the query.
        #[test]
        fn nearest_matches_linear_scan(
            times in prop::collection::vec(0i64..1_000, 0..40),
            query in -10i64..1_010,
        ) {
            let route = RouteCode::new("R").unwrap();
            let mut builder = InvertedTimetableBuilder::new();
            for (i, t) in times.iter().enumerate() {
                let vt = VehicleTime::new(
                    VehicleId::new(format!("V{i}")).unwrap(),
                    ScheduleTime::from_millis(*t),
                );
                builder.add(route.clone(), "S", vt);
            }
            let table = builder.build();

            let expected = times.iter().copied().filter(|t| *t > query).min();
            let actual = table
                .nearest_vehicle("S", "R", ScheduleTime::from_millis(query))
                .map(|vt| vt.time.as_millis());

            prop_assert_eq!(actual, expected);
        }
    }
}
