// ABOUTME: Planner state container with a single reducer over explicit actions
// ABOUTME: Owns the recipe store, draft, schedule and view state plus their derived views
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Planner state
//!
//! Every change goes through [`PlannerState::reduce`]. Network effects live in
//! [`crate::planner::Planner`], which reports their outcome here as actions.

/// Recipe creation form
pub mod draft;
/// Nutrition aggregation
pub mod nutrition;
/// Recipe collection, tags and search
pub mod recipes;
/// Weekly grid and drag-and-drop reducer
pub mod schedule;

pub use draft::{DraftAction, ListField, NutritionInput, RecipeDraft};
pub use nutrition::{day_totals, week_totals, NutritionTotals};
pub use recipes::RecipeStore;
pub use schedule::{DragEvent, DropLocation, Schedule};

use crate::errors::{AppError, AppResult};
use crate::models::{Day, Recipe, RecipeId};
use tracing::{debug, warn};

/// Top-level view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Recipe list, detail and create form
    #[default]
    Recipes,
    /// Weekly schedule grid
    Schedule,
}

/// What the recipes view is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Panel {
    /// The searchable list
    #[default]
    List,
    /// One recipe's details
    Detail(RecipeId),
    /// The create form
    CreateForm,
}

/// Status of the last network interaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    /// Nothing in flight
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last request failed; shown until dismissed or superseded
    Failed(String),
}

/// Everything that can happen to the planner
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A request was sent
    RequestStarted,
    /// The recipe collection was fetched
    RecipesLoaded(Vec<Recipe>),
    /// A submitted recipe was stored under a new id
    RecipeCreated(Recipe),
    /// A request failed
    RequestFailed(String),
    /// Hide the error message
    DismissError,
    /// Edit the draft
    Draft(DraftAction),
    /// A drag gesture ended
    Drop(DragEvent),
    /// Change the search text
    SetSearch(String),
    /// Switch between recipes and schedule
    ShowView(View),
    /// Open a recipe's detail panel
    SelectRecipe(RecipeId),
    /// Open the create form
    OpenCreateForm,
    /// Return to the recipe list
    BackToList,
}

/// The planner's whole client-side state
#[derive(Debug, Clone, Default)]
pub struct PlannerState {
    recipes: RecipeStore,
    draft: RecipeDraft,
    schedule: Schedule,
    view: View,
    panel: Panel,
    search: String,
    status: Status,
}

impl PlannerState {
    /// Fresh state: nothing loaded, empty draft and schedule
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action
    ///
    /// A rejected action leaves the state exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for drops or selections naming an unknown
    /// recipe, and `InvalidInput` for out-of-range draft edits
    pub fn reduce(&mut self, action: Action) -> AppResult<()> {
        match action {
            Action::RequestStarted => self.status = Status::Loading,
            Action::RecipesLoaded(recipes) => {
                debug!(count = recipes.len(), "Recipes loaded");
                self.recipes.replace(recipes);
                self.status = Status::Idle;
            }
            Action::RecipeCreated(recipe) => {
                debug!(recipe_id = %recipe.id, "Recipe created");
                self.recipes.push(recipe);
                self.draft.reset();
                if self.panel == Panel::CreateForm {
                    self.panel = Panel::List;
                }
                self.status = Status::Idle;
            }
            Action::RequestFailed(message) => {
                warn!(error = %message, "Request failed");
                self.status = Status::Failed(message);
            }
            Action::DismissError => {
                if matches!(self.status, Status::Failed(_)) {
                    self.status = Status::Idle;
                }
            }
            Action::Draft(edit) => self.draft.apply(edit)?,
            Action::Drop(event) => {
                self.schedule = self.schedule.apply_drop(&self.recipes, &event)?;
            }
            Action::SetSearch(query) => self.search = query,
            Action::ShowView(view) => self.view = view,
            Action::SelectRecipe(id) => {
                if self.recipes.get(&id).is_none() {
                    return Err(AppError::not_found(format!("Recipe {id}"))
                        .with_resource_id(id.as_str()));
                }
                self.view = View::Recipes;
                self.panel = Panel::Detail(id);
            }
            Action::OpenCreateForm => {
                self.view = View::Recipes;
                self.panel = Panel::CreateForm;
            }
            Action::BackToList => self.panel = Panel::List,
        }
        Ok(())
    }

    /// Recipe collection
    #[must_use]
    pub const fn recipes(&self) -> &RecipeStore {
        &self.recipes
    }

    /// Distinct tags across the collection
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.recipes.all_tags()
    }

    /// Recipe being authored
    #[must_use]
    pub const fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    /// Weekly grid
    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Active view
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Active panel of the recipes view
    #[must_use]
    pub const fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Current search text
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Status of the last request
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Recipes matching the search text
    #[must_use]
    pub fn filtered_recipes(&self) -> Vec<&Recipe> {
        self.recipes.search(&self.search)
    }

    /// Tag suggestions for the draft's tag input
    #[must_use]
    pub fn tag_suggestions(&self) -> Vec<&str> {
        self.draft.tag_suggestions(self.recipes.all_tags())
    }

    /// Recipe shown in the detail panel
    #[must_use]
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        match &self.panel {
            Panel::Detail(id) => self.recipes.get(id),
            Panel::List | Panel::CreateForm => None,
        }
    }

    /// Nutrition scheduled for one day
    #[must_use]
    pub fn day_totals(&self, day: Day) -> NutritionTotals {
        day_totals(&self.schedule, day)
    }
}
