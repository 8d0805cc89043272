// ABOUTME: HTTP client for the remote recipe API
// ABOUTME: RecipeApi trait seam plus a reqwest implementation with logging and a single retry
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipe API client
//!
//! The planner only needs two calls, [`RecipeApi::list_recipes`] and
//! [`RecipeApi::create_recipe`]. [`HttpRecipeClient`] also exposes the rest of
//! the service's surface for the command-line tool.

use crate::config::ClientConfig;
use crate::constants::{endpoints, network};
use crate::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
use crate::models::{NewRecipe, Recipe, RecipeId, RecipeUpdate};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, warn};

const SERVICE: &str = "recipe api";

/// Operations the planner session needs from the recipe store
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch every stored recipe
    async fn list_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// Store a new recipe and return the identity the service assigned
    async fn create_recipe(&self, recipe: &NewRecipe) -> AppResult<RecipeId>;
}

/// Body of a successful `POST /recipes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecipeResponse {
    /// Confirmation text
    #[serde(default)]
    pub message: String,
    /// Identity assigned to the new recipe
    pub id: RecipeId,
}

/// Body of a successful `PUT /recipes/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Confirmation text
    pub message: String,
}

/// Older deployments answer errors with a bare `{"error": "..."}`
#[derive(Debug, Deserialize)]
struct LegacyErrorBody {
    error: String,
}

/// Whether a failed attempt may be repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryPolicy {
    /// Safe to repeat: connection failures, timeouts and 5xx answers
    Idempotent,
    /// Only repeated when the request never reached the server
    ConnectOnly,
}

/// reqwest-backed recipe API client
#[derive(Debug, Clone)]
pub struct HttpRecipeClient {
    config: ClientConfig,
    http_client: Client,
}

impl HttpRecipeClient {
    /// Build a client for the configured base URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the HTTP client cannot be constructed
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    fn recipe_url(&self, id: &RecipeId) -> String {
        self.url(&format!("{}/{}", endpoints::RECIPES, id))
    }

    /// Fetch one recipe
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown ids and network errors otherwise
    pub async fn get_recipe(&self, id: &RecipeId) -> AppResult<Recipe> {
        let url = self.recipe_url(id);
        let response = self
            .execute("get_recipe", RetryPolicy::Idempotent, || {
                self.http_client.get(&url)
            })
            .await?;
        Ok(response.json().await?)
    }

    /// Replace the fields present in `update`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown ids and network errors otherwise
    pub async fn update_recipe(&self, id: &RecipeId, update: &RecipeUpdate) -> AppResult<String> {
        let url = self.recipe_url(id);
        let response = self
            .execute("update_recipe", RetryPolicy::Idempotent, || {
                self.http_client.put(&url).json(update)
            })
            .await?;
        let body: MessageResponse = response.json().await?;
        Ok(body.message)
    }

    /// Remove a recipe
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown ids and network errors otherwise
    pub async fn delete_recipe(&self, id: &RecipeId) -> AppResult<()> {
        let url = self.recipe_url(id);
        self.execute("delete_recipe", RetryPolicy::Idempotent, || {
            self.http_client.delete(&url)
        })
        .await?;
        Ok(())
    }

    /// Send a request, repeating it once when the policy allows
    async fn execute<F>(
        &self,
        operation: &'static str,
        policy: RetryPolicy,
        build: F,
    ) -> AppResult<Response>
    where
        F: Fn() -> RequestBuilder + Send + Sync,
    {
        let mut attempt = 1;
        loop {
            debug!(operation, attempt, "Sending recipe API request");
            let result = build().send().await;

            let retryable = match &result {
                Ok(response) => {
                    policy == RetryPolicy::Idempotent && response.status().is_server_error()
                }
                Err(e) => e.is_connect() || (policy == RetryPolicy::Idempotent && e.is_timeout()),
            };

            if retryable && attempt < network::MAX_ATTEMPTS {
                match &result {
                    Ok(response) => {
                        warn!(operation, attempt, status = %response.status(), "Recipe API request failed, retrying");
                    }
                    Err(e) => warn!(operation, attempt, error = %e, "Recipe API request failed, retrying"),
                }
                tokio::time::sleep(Duration::from_millis(network::RETRY_DELAY_MS)).await;
                attempt += 1;
                continue;
            }

            let outcome = match result {
                Ok(response) => check_status(response).await,
                Err(e) => Err(AppError::from(e)),
            };
            if let Err(e) = &outcome {
                if e.code == ErrorCode::ResourceNotFound {
                    debug!(operation, error = %e, "Recipe API reported not found");
                } else {
                    error!(operation, attempt, error = %e, "Recipe API request failed");
                }
            }
            return outcome;
        }
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeClient {
    async fn list_recipes(&self) -> AppResult<Vec<Recipe>> {
        let url = self.url(endpoints::RECIPES);
        let response = self
            .execute("list_recipes", RetryPolicy::Idempotent, || {
                self.http_client.get(&url)
            })
            .await?;
        let recipes: Vec<Recipe> = response.json().await?;
        debug!(count = recipes.len(), "Fetched recipes");
        Ok(recipes)
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> AppResult<RecipeId> {
        let url = self.url(endpoints::RECIPES);
        let response = self
            .execute("create_recipe", RetryPolicy::ConnectOnly, || {
                self.http_client.post(&url).json(recipe)
            })
            .await?;
        let body: CreateRecipeResponse = response.json().await?;
        debug!(recipe_id = %body.id, "Recipe stored");
        Ok(body.id)
    }
}

/// Turn a non-success answer into an `AppError`, keeping the server's message
async fn check_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|envelope| envelope.error.message)
        .or_else(|_| serde_json::from_str::<LegacyErrorBody>(&body).map(|legacy| legacy.error))
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                body.trim().to_owned()
            }
        });

    Err(match status {
        StatusCode::NOT_FOUND => AppError::new(ErrorCode::ResourceNotFound, message),
        s if s.is_client_error() => AppError::invalid_input(message),
        s => AppError::external_service(SERVICE, format!("HTTP {s}: {message}")),
    })
}
