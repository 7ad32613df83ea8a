//! Server configuration from the environment.
//!
//! | Variable                   | Default          |
//! |----------------------------|------------------|
//! | `TRANSIT_BIND_ADDR`        | `0.0.0.0:9999`   |
//! | `TRANSIT_RESOURCES_DIR`    | `./resources`    |
//! | `TRANSIT_FIXED_TIME_MS`    | unset: wall clock|
//! | `TRANSIT_MAX_STOPS`        | `10`             |
//! | `TRANSIT_MAX_JOURNEYS`     | `50`             |
//! | `TRANSIT_MAX_PLANNING_MS`  | unset: no limit  |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::ScheduleTime;
use crate::planner::PlannerConfig;

pub const BIND_ADDR_VAR: &str = "TRANSIT_BIND_ADDR";
pub const RESOURCES_DIR_VAR: &str = "TRANSIT_RESOURCES_DIR";
pub const FIXED_TIME_VAR: &str = "TRANSIT_FIXED_TIME_MS";
pub const MAX_STOPS_VAR: &str = "TRANSIT_MAX_STOPS";
pub const MAX_JOURNEYS_VAR: &str = "TRANSIT_MAX_JOURNEYS";
pub const MAX_PLANNING_VAR: &str = "TRANSIT_MAX_PLANNING_MS";

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 9999);
const DEFAULT_RESOURCES_DIR: &str = "./resources";

/// A configuration variable held a value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {variable}: {reason}")]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything the binary needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub resources_dir: PathBuf,

    /// Pin the query instant instead of reading the wall clock.
    pub fixed_time: Option<ScheduleTime>,

    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PlannerConfig::default();

        let bind_addr = parse_var(&lookup, BIND_ADDR_VAR)?.unwrap_or(DEFAULT_BIND_ADDR);
        let resources_dir = lookup(RESOURCES_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCES_DIR));
        let fixed_time =
            parse_var::<i64, _>(&lookup, FIXED_TIME_VAR)?.map(ScheduleTime::from_millis);

        let max_stops = parse_positive(&lookup, MAX_STOPS_VAR)?.unwrap_or(defaults.max_stops);
        let max_journeys =
            parse_positive(&lookup, MAX_JOURNEYS_VAR)?.unwrap_or(defaults.max_journeys);
        let max_planning_time =
            parse_var::<u64, _>(&lookup, MAX_PLANNING_VAR)?.map(Duration::from_millis);

        Ok(Self {
            bind_addr,
            resources_dir,
            fixed_time,
            planner: PlannerConfig::new(
                max_stops,
                max_journeys,
                defaults.index_tolerance,
                max_planning_time,
            ),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            resources_dir: PathBuf::from(DEFAULT_RESOURCES_DIR),
            fixed_time: None,
            planner: PlannerConfig::default(),
        }
    }
}

/// Parse a variable if set. Blank values count as unset.
fn parse_var<T, F>(lookup: &F, variable: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(variable) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some).map_err(|e: T::Err| ConfigError {
        variable,
        value: raw.clone(),
        reason: e.to_string(),
    })
}

fn parse_positive<F>(lookup: &F, variable: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_var::<usize, F>(lookup, variable)? {
        Some(0) => Err(ConfigError {
            variable,
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }),
        other => Ok(other),
    }
}
