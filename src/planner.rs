// ABOUTME: Planner session pairing the state container with a recipe API
// ABOUTME: Performs the initial fetch and draft submission and reports outcomes as actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::client::RecipeApi;
use crate::errors::AppResult;
use crate::models::{Recipe, RecipeId};
use crate::state::{Action, PlannerState};
use tracing::{error, info};

/// A planner state bound to the API it synchronizes with
#[derive(Debug)]
pub struct Planner<A: RecipeApi> {
    api: A,
    state: PlannerState,
}

impl<A: RecipeApi> Planner<A> {
    /// Start with an empty state
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: PlannerState::new(),
        }
    }

    /// Current state
    pub const fn state(&self) -> &PlannerState {
        &self.state
    }

    /// API the session talks to
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Apply a local action
    ///
    /// # Errors
    ///
    /// Returns the reducer's error; the state is unchanged in that case
    pub fn dispatch(&mut self, action: Action) -> AppResult<()> {
        self.state.reduce(action)
    }

    /// Fetch the recipe collection into the store
    ///
    /// # Errors
    ///
    /// Returns the network error after recording it as the visible status
    pub async fn load(&mut self) -> AppResult<()> {
        self.state.reduce(Action::RequestStarted)?;
        match self.api.list_recipes().await {
            Ok(recipes) => {
                info!(count = recipes.len(), "Loaded recipes");
                self.state.reduce(Action::RecipesLoaded(recipes))
            }
            Err(e) => {
                error!(error = %e, "Failed to load recipes");
                self.state.reduce(Action::RequestFailed(e.message.clone()))?;
                Err(e)
            }
        }
    }

    /// Validate and store the draft, then append it to the store
    ///
    /// # Errors
    ///
    /// Returns a validation error without contacting the API, or the network
    /// error after recording it as the visible status. The draft is kept on
    /// failure.
    pub async fn submit(&mut self) -> AppResult<RecipeId> {
        let new_recipe = self.state.draft().to_new_recipe()?;

        self.state.reduce(Action::RequestStarted)?;
        match self.api.create_recipe(&new_recipe).await {
            Ok(id) => {
                info!(recipe_id = %id, name = %new_recipe.name, "Recipe created");
                self.state
                    .reduce(Action::RecipeCreated(Recipe::from_new(id.clone(), new_recipe)))?;
                Ok(id)
            }
            Err(e) => {
                error!(error = %e, "Failed to create recipe");
                self.state.reduce(Action::RequestFailed(e.message.clone()))?;
                Err(e)
            }
        }
    }
}
