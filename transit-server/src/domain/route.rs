//! Route codes, paths and segments.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use super::{DomainError, Stop};

/// Identifier of a route line (e.g. `"R1"`).
///
/// Route codes are opaque; the only validation is that they are non-empty.
/// `RouteCode` borrows as `str`, so maps keyed by it can be queried with a
/// plain string slice.
///
/// # Examples
///
/// ```
/// use transit_server::domain::RouteCode;
///
/// let code = RouteCode::new("R1").unwrap();
/// assert_eq!(code.as_str(), "R1");
/// assert!(RouteCode::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteCode(String);

impl RouteCode {
    /// Create a route code, rejecting empty strings.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.is_empty() {
            return Err(DomainError::EmptyIdentifier { kind: "route code" });
        }
        Ok(Self(code))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteCode({})", self.0)
    }
}

impl fmt::Display for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One ride's line identity and length.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    /// Line being ridden
    pub route: RouteCode,
    /// Length of the ride, never negative
    pub distance: f64,
}

impl RoutePath {
    /// Create a path. Negative or non-finite distances are clamped to zero.
    pub fn new(route: RouteCode, distance: f64) -> Self {
        let distance = if distance.is_finite() && distance > 0.0 {
            distance
        } else {
            0.0
        };
        Self { route, distance }
    }
}

/// A ride between two stops on one route.
///
/// Before expansion this is a coarse "ride R from X to Y" fact taken from
/// the route graph; after expansion each segment is a single physical hop
/// between consecutive stops of the line.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    /// Boarding stop
    pub from: Arc<Stop>,
    /// Alighting stop
    pub to: Arc<Stop>,
    /// Line and distance
    pub path: RoutePath,
}

impl RouteSegment {
    /// Create a segment.
    pub fn new(from: Arc<Stop>, to: Arc<Stop>, path: RoutePath) -> Self {
        Self { from, to, path }
    }

    /// The route code ridden on this segment.
    pub fn route(&self) -> &RouteCode {
        &self.path.route
    }

    /// The segment's distance.
    pub fn distance(&self) -> f64 {
        self.path.distance
    }
}

/// A one-change candidate: ride `outbound` to a shared intermediate stop,
/// then change to `inbound`.
///
/// The two legs always carry different route codes.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSegments {
    pub outbound: RouteSegment,
    pub inbound: RouteSegment,
}

impl TransferSegments {
    /// The stop where the change happens.
    pub fn interchange(&self) -> &Stop {
        &self.outbound.to
    }
}
