//! Productos API - REST server over the `productos` MySQL table

use axum::Router;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Assemble routes, documentation and middleware for `state`.
fn build_router(state: &AppState) -> eyre::Result<Router> {
    let api_routes = api::routes(state);
    let router = create_router(openapi::document(&state.config.server), api_routes)?;
    Ok(router.merge(health_router(state.config.app)))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to MySQL");

    // A failed connect is logged and the server still starts
    let db = database::mysql::connect_or_lazy(config.database.clone()).await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    let app = build_router(&state)?;
    let shutdown_db = state.db.clone();

    info!(
        "Servidor corriendo en http://localhost:{}",
        state.config.server.port
    );
    info!(
        "Documentación disponible en http://localhost:{}/api-docs",
        state.config.server.port
    );

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MySQL connections");
            database::mysql::close(shutdown_db).await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Productos API shutdown complete");
    Ok(())
}
