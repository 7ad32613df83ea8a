//! Loading the network snapshots from disk.
//!
//! A resource directory holds six JSON files produced offline:
//!
//! | File                      | Contents                                |
//! |---------------------------|-----------------------------------------|
//! | `stops.json`              | every stop, keyed later by name         |
//! | `to-graph.json`           | forward graph: origin → destination     |
//! | `from-graph.json`         | reverse graph: destination → origin     |
//! | `routes.json`             | route code → ordered stop sequence      |
//! | `timetable.json`          | vehicle → stop → arrival time           |
//! | `inverted-timetable.json` | route → stop → vehicles calling there   |
//!
//! Everything is read once at startup. Any unreadable or malformed file is a
//! [`ResourceError`]; there is no partial load.

mod error;
mod records;

pub use error::ResourceError;
pub use records::{LocationRecord, RoutePathRecord, StopRecord, VehicleTimeRecord};

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::{DomainError, RouteCode, ScheduleTime, VehicleId};
use crate::network::{Adjacency, RouteGraph, RouteLines, StopCatalog, TransitNetwork};
use crate::timetable::{ForwardTimetable, InvertedTimetable, InvertedTimetableBuilder};

use records::{GraphFile, InvertedTimetableFile, RoutesFile, StopsFile, TimetableFile};

pub const STOPS_FILE: &str = "stops.json";
pub const FORWARD_GRAPH_FILE: &str = "to-graph.json";
pub const REVERSE_GRAPH_FILE: &str = "from-graph.json";
pub const ROUTES_FILE: &str = "routes.json";
pub const TIMETABLE_FILE: &str = "timetable.json";
pub const INVERTED_TIMETABLE_FILE: &str = "inverted-timetable.json";

/// The loaded snapshots, before the spatial index is built.
#[derive(Debug)]
pub struct Resources {
    pub catalog: StopCatalog,
    pub graph: RouteGraph,
    pub lines: RouteLines,
    pub forward: ForwardTimetable,
    pub inverted: InvertedTimetable,
}

impl Resources {
    /// Read every snapshot from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let dir = dir.as_ref();
        info!(dir = %dir.display(), "loading network resources");

        let catalog = load_stops(&dir.join(STOPS_FILE))?;
        let forward_graph = load_graph(&dir.join(FORWARD_GRAPH_FILE))?;
        let reverse_graph = load_graph(&dir.join(REVERSE_GRAPH_FILE))?;
        let lines = load_routes(&dir.join(ROUTES_FILE))?;
        let forward = load_timetable(&dir.join(TIMETABLE_FILE))?;
        let inverted = load_inverted_timetable(&dir.join(INVERTED_TIMETABLE_FILE))?;

        info!(
            stops = catalog.len(),
            forward_edges = forward_graph.len(),
            reverse_edges = reverse_graph.len(),
            routes = lines.len(),
            vehicles = forward.vehicle_count(),
            timetabled_routes = inverted.route_count(),
            "loaded network resources"
        );

        Ok(Self {
            catalog,
            graph: RouteGraph::new(forward_graph, reverse_graph),
            lines,
            forward,
            inverted,
        })
    }

    /// Assemble the planner's network, building the spatial index.
    pub fn into_network(self, index_tolerance: f64) -> TransitNetwork {
        let network = TransitNetwork::new(
            self.catalog,
            self.graph,
            self.lines,
            self.inverted,
            self.forward,
            index_tolerance,
        );
        debug!(indexed = network.index.len(), "built stop index");
        network
    }
}

/// Read and parse one JSON file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ResourceError> {
    let contents = fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ResourceError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn invalid(path: &Path) -> impl FnOnce(DomainError) -> ResourceError {
    let path: PathBuf = path.to_path_buf();
    move |source| ResourceError::InvalidRecord { path, source }
}

fn load_stops(path: &Path) -> Result<StopCatalog, ResourceError> {
    let records: StopsFile = read_json(path)?;
    let mut catalog = StopCatalog::new();
    for record in records {
        catalog.insert(record.into_stop().map_err(invalid(path))?);
    }
    Ok(catalog)
}

fn load_graph(path: &Path) -> Result<Adjacency, ResourceError> {
    let file: GraphFile = read_json(path)?;
    let mut adjacency = Adjacency::new();
    for (key, neighbours) in file {
        for (neighbour, paths) in neighbours {
            for path_record in paths {
                let route_path = path_record.into_path().map_err(invalid(path))?;
                adjacency.add(key.as_str(), neighbour.as_str(), route_path);
            }
        }
    }
    Ok(adjacency)
}

fn load_routes(path: &Path) -> Result<RouteLines, ResourceError> {
    let file: RoutesFile = read_json(path)?;
    let mut lines = RouteLines::new();
    for (code, records) in file {
        let route = RouteCode::new(code).map_err(invalid(path))?;
        let stops = records
            .into_iter()
            .map(StopRecord::into_stop)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid(path))?;
        lines.insert(route, stops);
    }
    Ok(lines)
}

fn load_timetable(path: &Path) -> Result<ForwardTimetable, ResourceError> {
    let file: TimetableFile = read_json(path)?;
    let mut timetable = ForwardTimetable::new();
    for (vehicle, arrivals) in file {
        let vehicle = VehicleId::new(vehicle).map_err(invalid(path))?;
        for (stop, millis) in arrivals {
            timetable.add(vehicle.clone(), stop, ScheduleTime::from_millis(millis));
        }
    }
    Ok(timetable)
}

fn load_inverted_timetable(path: &Path) -> Result<InvertedTimetable, ResourceError> {
    let file: InvertedTimetableFile = read_json(path)?;
    let mut builder = InvertedTimetableBuilder::new();
    for (code, stops) in file {
        let route = RouteCode::new(code).map_err(invalid(path))?;
        for (stop, records) in stops {
            let vehicles = records
                .into_iter()
                .map(VehicleTimeRecord::into_vehicle_time)
                .collect::<Result<Vec<_>, _>>()
                .map_err(invalid(path))?;
            builder.extend(route.clone(), stop, vehicles);
        }
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;
    use tempfile::tempdir;

    const STOPS: &str = r#"[
        {"StopPointName": "P", "Location": {"Latitude": 0.0, "Longitude": 0.0}, "LineRef": "R1", "Order": 0, "nextDistance": 5},
        {"StopPointName": "Q", "Location": {"Latitude": 1.0, "Longitude": 1.0}, "LineRef": "R1", "Order": 1, "nextDistance": 0}
    ]"#;
    const TO_GRAPH: &str = r#"{"P": {"Q": [{"route_code": "R1", "distance": 5}]}}"#;
    const FROM_GRAPH: &str = r#"{"Q": {"P": [{"route_code": "R1", "distance": 5}]}}"#;
    const ROUTES: &str = r#"{"R1": [
        {"StopPointName": "P", "Location": {"Latitude": 0.0, "Longitude": 0.0}, "LineRef": "R1", "Order": 0, "nextDistance": 5},
        {"StopPointName": "Q", "Location": {"Latitude": 1.0, "Longitude": 1.0}, "LineRef": "R1", "Order": 1, "nextDistance": 0}
    ]}"#;
    const TIMETABLE: &str = r#"{"V1": {"Q": 1500}, "V2": {"Q": 2500}}"#;
    const INVERTED: &str =
        r#"{"R1": {"P": [{"Time": 2000, "Vehicle": "V2"}, {"Time": 1000, "Vehicle": "V1"}]}}"#;

    fn write_fixture(dir: &Path) {
        fs::write(dir.join(STOPS_FILE), STOPS).unwrap();
        fs::write(dir.join(FORWARD_GRAPH_FILE), TO_GRAPH).unwrap();
        fs::write(dir.join(REVERSE_GRAPH_FILE), FROM_GRAPH).unwrap();
        fs::write(dir.join(ROUTES_FILE), ROUTES).unwrap();
        fs::write(dir.join(TIMETABLE_FILE), TIMETABLE).unwrap();
        fs::write(dir.join(INVERTED_TIMETABLE_FILE), INVERTED).unwrap();
    }

    #[test]
    fn load_fixture_directory() {
        let dir = tempdir().unwrap();
        write_fixture(dir.path());

        let resources = Resources::load(dir.path()).unwrap();

        assert_eq!(resources.catalog.len(), 2);
        assert_eq!(resources.graph.forward().paths("P", "Q").len(), 1);
        assert_eq!(resources.graph.reverse().paths("Q", "P").len(), 1);
        assert_eq!(resources.lines.stops("R1").map(|s| s.len()), Some(2));
        assert_eq!(
            resources.forward.arrival_time("V1", "Q"),
            Some(ScheduleTime::from_millis(1500))
        );
    }

    #[test]
    fn inverted_sequences_sorted_on_load() {
        let dir = tempdir().unwrap();
        write_fixture(dir.path());

        let resources = Resources::load(dir.path()).unwrap();
        let times: Vec<_> = resources
            .inverted
            .vehicles_at("P", "R1")
            .iter()
            .map(|vt| vt.time.as_millis())
            .collect();

        assert_eq!(times, vec![1000, 2000]);
    }

    #[test]
    fn into_network_indexes_every_stop() {
        let dir = tempdir().unwrap();
        write_fixture(dir.path());

        let network = Resources::load(dir.path()).unwrap().into_network(0.001);

        assert_eq!(network.index.len(), 2);
        let nearest = network
            .index
            .nearest_stops(&Position::new(0.9, 0.9).unwrap(), 1);
        assert_eq!(nearest[0].name(), "Q");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        write_fixture(dir.path());
        fs::remove_file(dir.path().join(ROUTES_FILE)).unwrap();

        let err = Resources::load(dir.path()).unwrap_err();

        assert!(matches!(err, ResourceError::Io { .. }));
        assert_eq!(err.path(), dir.path().join(ROUTES_FILE));
    }

    #[test]
    fn malformed_file_is_json_error() {
        let dir = tempdir().unwrap();
        write_fixture(dir.path());
        fs::write(dir.path().join(TIMETABLE_FILE), "{not json").unwrap();

        let err = Resources::load(dir.path()).unwrap_err();

        assert!(matches!(err, ResourceError::Json { .. }));
        assert!(err.to_string().contains(TIMETABLE_FILE));
    }

    #[test]
    fn wrong_shape_is_json_error() {
        let dir = tempdir().unwrap();
        write_fixture(dir.path());
        fs::write(dir.path().join(STOPS_FILE), r#"{"P": {}}"#).unwrap();

        let err = Resources::load(dir.path()).unwrap_err();
        assert!(matches!(err, ResourceError::Json { .. }));
    }

    #[test]
    fn empty_identifier_is_invalid_record() {
        let dir = tempdir().unwrap();
        write_fixture(dir.path());
        fs::write(
            dir.path().join(INVERTED_TIMETABLE_FILE),
            r#"{"R1": {"P": [{"Time": 1000, "Vehicle": ""}]}}"#,
        )
        .unwrap();

        let err = Resources::load(dir.path()).unwrap_err();

        assert!(matches!(err, ResourceError::InvalidRecord { .. }));
        assert_eq!(err.path(), dir.path().join(INVERTED_TIMETABLE_FILE));
    }
}
