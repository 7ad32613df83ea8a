//! Vehicle identifiers and timetable events.

use std::borrow::Borrow;
use std::fmt;

use super::{DomainError, ScheduleTime};

/// Identifier of a single vehicle run.
///
/// Like [`RouteCode`](super::RouteCode) this borrows as `str` for map lookups.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(String);

impl VehicleId {
    /// Create a vehicle identifier, rejecting empty strings.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::EmptyIdentifier { kind: "vehicle id" });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VehicleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A vehicle scheduled at some point at a given time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleTime {
    pub vehicle: VehicleId,
    pub time: ScheduleTime,
}

impl VehicleTime {
    pub fn new(vehicle: VehicleId, time: ScheduleTime) -> Self {
        Self { vehicle, time }
    }
}
