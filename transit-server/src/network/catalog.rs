//! Stop catalog: name → stop.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::Stop;

/// All known stops, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct StopCatalog {
    stops: HashMap<String, Arc<Stop>>,
}

impl StopCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop. A later stop with the same name replaces the earlier one.
    pub fn insert(&mut self, stop: Stop) {
        self.stops.insert(stop.name().to_string(), Arc::new(stop));
    }

    /// Look up a stop by name.
    pub fn get(&self, name: &str) -> Option<&Arc<Stop>> {
        self.stops.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stops.contains_key(name)
    }

    /// Iterate over all stops in unspecified order.
    pub fn stops(&self) -> impl Iterator<Item = &Arc<Stop>> {
        self.stops.values()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl FromIterator<Stop> for StopCatalog {
    fn from_iter<I: IntoIterator<Item = Stop>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for stop in iter {
            catalog.insert(stop);
        }
        catalog
    }
}
