//! Planner configuration.

use std::time::Duration;

/// Configuration parameters for journey planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Candidate stops considered around each query coordinate.
    pub max_stops: usize,

    /// Maximum number of journeys to return.
    pub max_journeys: usize,

    /// Half-width in degrees of each stop's rectangle in the spatial index.
    pub index_tolerance: f64,

    /// Optional budget for one planning run.
    /// Once exceeded, remaining stop pairs are skipped and the journeys
    /// found so far are returned.
    pub max_planning_time: Option<Duration>,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_stops: usize,
        max_journeys: usize,
        index_tolerance: f64,
        max_planning_time: Option<Duration>,
    ) -> Self {
        Self {
            max_stops,
            max_journeys,
            index_tolerance,
            max_planning_time,
        }
    }

    /// Set the planning budget.
    pub fn with_max_planning_time(mut self, limit: Duration) -> Self {
        self.max_planning_time = Some(limit);
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_stops: 10,
            max_journeys: 50,
            index_tolerance: 0.001,
            max_planning_time: None,
        }
    }
}
