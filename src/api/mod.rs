//! HTTP layer - routes, handlers and transfer objects
//!
//! Handlers decode requests, call into [`crate::core`] and translate entity models to
//! DTOs. Every failure is reported through the single `IntoResponse` impl on
//! [`crate::errors::Error`].

/// Request/response body shapes
pub mod dto;
/// Error to HTTP response mapping
pub mod error;
/// Route handlers
pub mod handlers;

use crate::{config::server::ServerConfig, errors::Result};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::{crops, farms, fertilizers};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument};

/// Shared data available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for all database operations
    pub database: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around the given connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

/// Builds the application router with all routes and middleware attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/farms", get(farms::get_all_farms).post(farms::create_farm))
        .route("/farms/:farm_id", get(farms::get_farm_by_id))
        .route(
            "/farms/:farm_id/crops",
            get(farms::get_crops_by_farm_id).post(farms::create_crop),
        )
        .route("/crops", get(crops::get_all_crops))
        .route("/crops/search", get(crops::get_by_harvest_date))
        .route("/crops/:crop_id", get(crops::get_crop_by_id))
        .route(
            "/crops/:crop_id/fertilizers",
            get(crops::get_fertilizers_by_crop_id),
        )
        .route(
            "/crops/:crop_id/fertilizers/:fertilizer_id",
            post(crops::add_fertilizer_to_crop),
        )
        .route(
            "/fertilizers",
            get(fertilizers::get_all_fertilizers).post(fertilizers::create_fertilizer),
        )
        .route(
            "/fertilizers/:fertilizer_id",
            get(fertilizers::get_fertilizer_by_id),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves the API until the process is stopped.
#[instrument(skip(database))]
pub async fn serve(config: &ServerConfig, database: DatabaseConnection) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    info!("Agrix API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(AppState::new(database))).await?;
    Ok(())
}
