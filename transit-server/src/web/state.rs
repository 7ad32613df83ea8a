//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::Clock;
use crate::network::TransitNetwork;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Loaded transit network
    pub network: Arc<TransitNetwork>,

    /// Journey planner configuration
    pub config: Arc<PlannerConfig>,

    /// Source of the query instant
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: TransitNetwork,
        config: PlannerConfig,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
            clock: Arc::new(clock),
        }
    }
}
