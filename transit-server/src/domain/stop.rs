//! Transit stops.

use super::Position;

/// A boarding/alighting point on one route line.
///
/// Stops are identified by name. A stop belongs to exactly one line
/// (`line_ref`); `order` is its index in that line's canonical stop
/// sequence and `next_distance` the distance to the following stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    name: String,
    position: Position,
    line_ref: String,
    order: f64,
    next_distance: f64,
}

impl Stop {
    /// Create a stop with zero order and next-stop distance.
    pub fn new(name: impl Into<String>, position: Position, line_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position,
            line_ref: line_ref.into(),
            order: 0.0,
            next_distance: 0.0,
        }
    }

    /// Set the stop's index within its line.
    pub fn with_order(mut self, order: f64) -> Self {
        self.order = order;
        self
    }

    /// Set the distance to the next stop on the line.
    pub fn with_next_distance(mut self, next_distance: f64) -> Self {
        self.next_distance = next_distance;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line_ref(&self) -> &str {
        &self.line_ref
    }

    pub fn order(&self) -> f64 {
        self.order
    }

    pub fn next_distance(&self) -> f64 {
        self.next_distance
    }

    /// Great-circle distance from this stop to `point`, in metres.
    pub fn distance_to(&self, point: &Position) -> f64 {
        self.position.haversine_distance(point)
    }
}
