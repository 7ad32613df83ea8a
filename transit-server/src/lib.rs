//! Transit journey planner server.
//!
//! A web service that answers: "I'm standing here and want to get there;
//! which buses can take me, with at most one change?"
//!
//! The network (stops, route graph, route lines, timetables) is loaded once
//! from JSON snapshots and shared read-only between requests.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod resources;
pub mod spatial;
pub mod timetable;
pub mod web;
