// ABOUTME: Route handlers for the recipe REST API
// ABOUTME: CRUD over stored recipes plus ingredient and instruction sub-resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipe routes
//!
//! Records are returned with their identity under `_id`. Error answers use
//! the shared JSON error envelope.

use crate::{
    client::{CreateRecipeResponse, MessageResponse},
    errors::{AppError, AppResult},
    models::{NewRecipe, Recipe, RecipeId, RecipeUpdate},
    server::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/recipes",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/recipes/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route("/recipes/:id/ingredients", get(Self::handle_ingredients))
            .route("/recipes/:id/instructions", get(Self::handle_instructions))
            .with_state(resources)
    }

    /// Handle GET /recipes - Every recipe in insertion order
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let recipes = resources.recipes.list().await?;
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle POST /recipes - Store a new recipe
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<NewRecipe>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(recipe) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        recipe.validate()?;

        let created = resources.recipes.create(recipe).await?;
        info!(recipe_id = %created.id, name = %created.name, "Recipe created");

        let response = CreateRecipeResponse {
            message: "Recipe created successfully".to_owned(),
            id: created.id,
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /recipes/:id - One recipe
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = Self::find(&resources, id).await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle PUT /recipes/:id - Replace the fields present in the body
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        body: Result<Json<RecipeUpdate>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(update) = body.map_err(|e| AppError::invalid_input(e.body_text()))?;
        if update.is_empty() {
            return Err(AppError::invalid_input("Update contains no recipe fields"));
        }
        if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::missing_field("name"));
        }

        let id = RecipeId::from(id);
        resources
            .recipes
            .update(&id, update)
            .await?
            .ok_or_else(|| not_found(&id))?;

        info!(recipe_id = %id, "Recipe updated");
        let response = MessageResponse {
            message: format!("Recipe {id} updated successfully"),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /recipes/:id - Remove a recipe
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = RecipeId::from(id);
        if !resources.recipes.delete(&id).await? {
            return Err(not_found(&id));
        }

        info!(recipe_id = %id, "Recipe deleted");
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }

    /// Handle GET /recipes/:id/ingredients
    async fn handle_ingredients(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = Self::find(&resources, id).await?;
        Ok((StatusCode::OK, Json(recipe.ingredients)).into_response())
    }

    /// Handle GET /recipes/:id/instructions
    async fn handle_instructions(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = Self::find(&resources, id).await?;
        Ok((StatusCode::OK, Json(recipe.instructions)).into_response())
    }

    async fn find(resources: &ServerResources, id: String) -> AppResult<Recipe> {
        let id = RecipeId::from(id);
        resources
            .recipes
            .get(&id)
            .await?
            .ok_or_else(|| not_found(&id))
    }
}

fn not_found(id: &RecipeId) -> AppError {
    AppError::not_found("Recipe").with_resource_id(id.as_str())
}
