// ABOUTME: Health check and welcome route handlers for the recipe service
// ABOUTME: Provides the root greeting plus liveness and readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check routes for service monitoring

use crate::constants::endpoints;
use crate::server::ServerResources;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the root, health and readiness routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        async fn welcome_handler() -> &'static str {
            "Welcome to the Meal Planner API!"
        }

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "service": crate::constants::service_names::MEAL_PLANNER_SERVER,
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        // Ready once the recipe table answers
        async fn ready_handler(
            State(resources): State<Arc<ServerResources>>,
        ) -> (StatusCode, Json<serde_json::Value>) {
            match resources.recipes.count().await {
                Ok(count) => (
                    StatusCode::OK,
                    Json(serde_json::json!({
                        "status": "ready",
                        "recipes": count,
                        "timestamp": chrono::Utc::now().to_rfc3339()
                    })),
                ),
                Err(e) => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(serde_json::json!({
                        "status": "unavailable",
                        "error": e.message,
                        "timestamp": chrono::Utc::now().to_rfc3339()
                    })),
                ),
            }
        }

        Router::new()
            .route("/", get(welcome_handler))
            .route(endpoints::HEALTH_CHECK, get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(resources)
    }
}
