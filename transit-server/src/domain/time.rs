//! Schedule times and the query clock.
//!
//! Timetable snapshots carry times as integer epoch milliseconds. The planner
//! only ever compares and subtracts them, so `ScheduleTime` stays a thin
//! wrapper; chrono is used for display and for reading the wall clock.

use std::fmt;

use chrono::{DateTime, Utc};

/// An instant in epoch milliseconds, as found in the timetables.
///
/// # Examples
///
/// ```
/// use transit_server::domain::ScheduleTime;
///
/// let depart = ScheduleTime::from_millis(900);
/// let arrive = ScheduleTime::from_millis(1500);
/// assert_eq!(arrive.abs_diff(depart), 600);
/// assert_eq!(depart.abs_diff(arrive), 600);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleTime(i64);

impl ScheduleTime {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Magnitude of the difference between two instants, in milliseconds.
    pub fn abs_diff(self, other: ScheduleTime) -> i64 {
        self.0.abs_diff(other.0).min(i64::MAX as u64) as i64
    }

    /// Convert to a UTC datetime, if representable.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Debug for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleTime({})", self.0)
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}ms", self.0),
        }
    }
}

/// Source of the query instant.
///
/// Read once per request so every candidate journey is timed against the
/// same instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> ScheduleTime;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ScheduleTime {
        ScheduleTime::from_millis(Utc::now().timestamp_millis())
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ScheduleTime);

impl FixedClock {
    pub fn at_millis(millis: i64) -> Self {
        Self(ScheduleTime::from_millis(millis))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> ScheduleTime {
        self.0
    }
}
