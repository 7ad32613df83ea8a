//! Journey planner.
//!
//! Answers "how do I get from here to there, leaving now?" over a loaded
//! [`TransitNetwork`](crate::network::TransitNetwork).
//!
//! Planning is a bounded enumeration rather than a graph search: the nearest
//! stops around each coordinate are paired up, each pair contributes its
//! direct and one-change candidates, and each candidate is timed against the
//! timetables. Candidates that cannot be caught in full are dropped.

mod config;
mod rank;
mod search;

pub use config::PlannerConfig;
pub use rank::{rank_and_truncate, rank_journeys};
pub use search::{JourneyPlanner, PlanRequest, PlanResult};
