//! HTTP route handlers.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::Position;
use crate::planner::{JourneyPlanner, PlanRequest};

use super::dto::*;
use super::state::AppState;

/// Longest a single request may take before the client gets a 408.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route("/routes", get(missing_coordinates))
        .route("/routes/", get(missing_coordinates))
        .route("/routes/:latlng1", get(missing_coordinates))
        .route("/routes/:latlng1/", get(missing_coordinates))
        .route("/routes/:latlng1/:latlng2", get(plan_routes))
        .fallback(not_found);

    with_serving_layers(routes, REQUEST_TIMEOUT).with_state(state)
}

/// Timeout innermost, so a 408 still passes through tracing and CORS.
fn with_serving_layers(router: Router<AppState>, timeout: Duration) -> Router<AppState> {
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// JSON 404 for anything unrouted.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        message: format!("no route for {uri}"),
    }
}

/// The routes endpoint needs both coordinates.
async fn missing_coordinates() -> AppError {
    AppError::BadRequest {
        message: "expected /routes/{lat,lng}/{lat,lng}".to_string(),
    }
}

/// Plan journeys between two `lat,lng` coordinates, leaving now.
async fn plan_routes(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<PlanResponse>, AppError> {
    let origin = Position::parse(&from).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    let destination = Position::parse(&to).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let request = PlanRequest::new(origin, destination, state.clock.now());
    debug!(%origin, %destination, departure = %request.departure, "planning journeys");

    // Planning is CPU-bound; keep it off the async workers
    let network = state.network.clone();
    let config = state.config.clone();
    let result = tokio::task::spawn_blocking(move || {
        JourneyPlanner::new(&network, &config).plan(&request)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("planner task failed: {e}"),
    })?;

    if result.timed_out {
        warn!(
            journeys = result.journeys.len(),
            "planning budget exhausted, response is partial"
        );
    }

    Ok(Json(PlanResponse::from_journeys(&result.journeys)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
