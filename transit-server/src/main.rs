use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_server::config::ServerConfig;
use transit_server::domain::{FixedClock, SystemClock};
use transit_server::resources::Resources;
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // The planner is useless without a network, so fail fast
    let network = match Resources::load(&config.resources_dir) {
        Ok(resources) => resources.into_network(config.planner.index_tolerance),
        Err(e) => {
            error!("failed to load resources: {e}");
            return ExitCode::FAILURE;
        }
    };

    let state = match config.fixed_time {
        Some(time) => {
            info!(%time, "using fixed query time");
            AppState::new(network, config.planner.clone(), FixedClock(time))
        }
        None => AppState::new(network, config.planner.clone(), SystemClock),
    };

    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %config.bind_addr, "transit journey planner listening");
    info!("  GET  /health                      - Health check");
    info!("  GET  /routes/{{lat,lng}}/{{lat,lng}}  - Plan journeys");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    info!("shut down");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
    }
}
