//! Web layer for the transit journey planner.
//!
//! Exposes `GET /routes/{lat,lng}/{lat,lng}` returning ranked journeys and
//! `GET /health`.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
