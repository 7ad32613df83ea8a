//! Domain types for the transit journey planner.
//!
//! Everything here is immutable once built. Catalog-level types (`Stop`,
//! route codes, timetable entries) are loaded once at startup and shared
//! by reference across requests; `RouteJourney` is produced fresh per query.

mod error;
mod journey;
mod position;
mod route;
mod stop;
mod time;
mod vehicle;

pub use error::DomainError;
pub use journey::RouteJourney;
pub use position::Position;
pub use route::{RouteCode, RoutePath, RouteSegment, TransferSegments};
pub use stop::Stop;
pub use time::{Clock, FixedClock, ScheduleTime, SystemClock};
pub use vehicle::{VehicleId, VehicleTime};
