// ABOUTME: Recipe service assembly: shared resources, router and HTTP serve loop
// ABOUTME: Wires recipe and health routes with CORS and request tracing, and shuts down on Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::ServerConfig;
use crate::database::RecipeManager;
use crate::errors::{AppError, AppResult};
use crate::middleware::{create_request_span, setup_cors};
use crate::routes::{HealthRoutes, RecipeRoutes};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// State shared by every request handler
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Recipe storage
    pub recipes: RecipeManager,
    /// Service configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle the shared state
    #[must_use]
    pub const fn new(recipes: RecipeManager, config: Arc<ServerConfig>) -> Self {
        Self { recipes, config }
    }

    /// Open the configured database and bundle it with the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn from_config(config: ServerConfig) -> AppResult<Self> {
        let recipes = RecipeManager::connect(&config.database).await?;
        Ok(Self::new(recipes, Arc::new(config)))
    }
}

/// Build the full router with middleware
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(resources))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(cors)
}

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::config(format!("Failed to bind {address}: {e}")))?;

    info!(address = %address, "Recipe service listening");

    axum::serve(listener, router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Recipe service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
