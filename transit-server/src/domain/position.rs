//! Geographic positions.

use std::fmt;

use geo::{Distance, Haversine, Point};

use super::DomainError;

/// A WGS84 coordinate in degrees.
///
/// Both components are guaranteed finite when built through [`Position::new`]
/// or [`Position::parse`].
///
/// # Examples
///
/// ```
/// use transit_server::domain::Position;
///
/// let pos = Position::parse("51.5074,-0.1278").unwrap();
/// assert_eq!(pos.latitude(), 51.5074);
/// assert_eq!(pos.longitude(), -0.1278);
///
/// // Both halves are required
/// assert!(Position::parse("51.5074").is_err());
/// assert!(Position::parse("north,west").is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Position {
    latitude: f64,
    longitude: f64,
}

impl Position {
    /// Create a position, rejecting non-finite components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::InvalidCoordinates {
                input: format!("{latitude},{longitude}"),
                reason: "coordinates must be finite numbers",
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a `"lat,lng"` pair as it appears in request paths.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid = |reason| DomainError::InvalidCoordinates {
            input: s.to_string(),
            reason,
        };

        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected \"lat,lng\""))?;
        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| invalid("latitude is not a number"))?;
        let longitude: f64 = lng
            .trim()
            .parse()
            .map_err(|_| invalid("longitude is not a number"))?;

        Self::new(latitude, longitude).map_err(|_| invalid("coordinates must be finite numbers"))
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Coordinates in spatial-index space: `[lat, lng]`.
    pub fn as_index_point(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    /// Great-circle distance to `other` in metres.
    pub fn haversine_distance(&self, other: &Position) -> f64 {
        Haversine.distance(self.to_point(), other.to_point())
    }

    fn to_point(self) -> Point<f64> {
        // geo points are (x = longitude, y = latitude)
        Point::new(self.longitude, self.latitude)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(lat: f64, lng: f64) -> Position {
        Position::new(lat, lng).unwrap()
    }

    #[test]
    fn parse_valid() {
        let p = Position::parse("-33.8688,151.2093").unwrap();
        assert_eq!(p.latitude(), -33.8688);
        assert_eq!(p.longitude(), 151.2093);
    }

    #[test]
    fn parse_tolerates_whitespace() {
        let p = Position::parse(" 1.5 , 2.5 ").unwrap();
        assert_eq!(p, pos(1.5, 2.5));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(Position::parse("").is_err());
        assert!(Position::parse("1.0").is_err());
        assert!(Position::parse("1.0,").is_err());
        assert!(Position::parse(",1.0").is_err());
        assert!(Position::parse("a,b").is_err());
        assert!(Position::parse("1.0,2.0,3.0").is_err());
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert!(Position::parse("NaN,1.0").is_err());
        assert!(Position::parse("1.0,inf").is_err());
    }

    #[test]
    fn new_rejects_non_finite() {
        assert!(Position::new(f64::NAN, 0.0).is_err());
        assert!(Position::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn error_mentions_input() {
        let err = Position::parse("abc").unwrap_err();
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn haversine_zero_for_same_point() {
        let p = pos(48.8566, 2.3522);
        assert_eq!(p.haversine_distance(&p), 0.0);
    }

    #[test]
    fn haversine_one_degree_latitude() {
        // One degree of latitude is roughly 111 km everywhere
        let d = pos(0.0, 0.0).haversine_distance(&pos(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = pos(51.5, -0.12);
        let b = pos(48.85, 2.35);
        let ab = a.haversine_distance(&b);
        let ba = b.haversine_distance(&a);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn index_point_is_lat_lng() {
        assert_eq!(pos(1.0, 2.0).as_index_point(), [1.0, 2.0]);
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let p = pos(12.25, -7.5);
        assert_eq!(Position::parse(&p.to_string()).unwrap(), p);
    }
}
