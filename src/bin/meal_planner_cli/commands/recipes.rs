// ABOUTME: Recipe commands for meal-planner-cli
// ABOUTME: Handles list, show, create and delete against the recipe API
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use meal_planner::{
    client::HttpRecipeClient,
    errors::{AppError, AppResult},
    models::{MealType, Nutrient, RecipeId},
    planner::Planner,
    state::{Action, DraftAction, ListField},
};
use tracing::info;

use crate::helpers::display::{display_recipe, display_recipe_list};

type Result<T> = AppResult<T>;

/// Values collected from the `recipes create` flags
pub struct CreateRequest {
    pub name: String,
    pub meal_type: Option<MealType>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
}

/// List recipes, optionally narrowed by a search
pub async fn list(client: HttpRecipeClient, search: Option<String>) -> Result<()> {
    let mut planner = Planner::new(client);
    planner.load().await?;

    if let Some(query) = search {
        planner.dispatch(Action::SetSearch(query))?;
    }

    let recipes = planner.state().filtered_recipes();
    display_recipe_list(&recipes, planner.state().search());
    Ok(())
}

/// Show one recipe's detail
pub async fn show(client: HttpRecipeClient, id: RecipeId) -> Result<()> {
    let mut planner = Planner::new(client);
    planner.load().await?;
    planner.dispatch(Action::SelectRecipe(id.clone()))?;

    let recipe = planner
        .state()
        .selected_recipe()
        .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
    display_recipe(recipe);
    Ok(())
}

/// Fill the draft from the flags and submit it
pub async fn create(client: HttpRecipeClient, request: CreateRequest) -> Result<()> {
    let mut planner = Planner::new(client);
    // Known tags are only needed for the store; a failed load should not block creation
    if let Err(e) = planner.load().await {
        info!(error = %e, "Continuing without the existing recipe list");
        planner.dispatch(Action::DismissError)?;
    }

    planner.dispatch(Action::OpenCreateForm)?;
    for action in draft_actions(request) {
        planner.dispatch(Action::Draft(action))?;
    }

    let id = planner.submit().await?;
    let recipe = planner
        .state()
        .recipes()
        .get(&id)
        .ok_or_else(|| AppError::internal(format!("Created recipe {id} missing from store")))?;

    println!("\nRecipe created successfully");
    println!("{}", "=".repeat(50));
    display_recipe(recipe);
    Ok(())
}

/// Delete a recipe
pub async fn delete(client: &HttpRecipeClient, id: &RecipeId) -> Result<()> {
    client.delete_recipe(id).await?;
    println!("Recipe {id} deleted");
    Ok(())
}

/// Translate the flag values into the edits a form would produce
fn draft_actions(request: CreateRequest) -> Vec<DraftAction> {
    let mut actions = vec![
        DraftAction::SetName(request.name),
        DraftAction::SetMealType(request.meal_type),
    ];

    for (field, rows) in [
        (ListField::Ingredients, request.ingredients),
        (ListField::Instructions, request.instructions),
    ] {
        for (index, text) in rows.into_iter().enumerate() {
            // The draft starts with one blank row
            if index > 0 {
                actions.push(DraftAction::AddRow(field));
            }
            actions.push(DraftAction::SetRow { field, index, text });
        }
    }

    actions.extend(request.tags.into_iter().map(DraftAction::AddTag));

    for (nutrient, value) in [
        (Nutrient::Calories, request.calories),
        (Nutrient::Protein, request.protein),
        (Nutrient::Carbs, request.carbs),
        (Nutrient::Fat, request.fat),
    ] {
        if let Some(value) = value {
            actions.push(DraftAction::SetNutrient(nutrient, value));
        }
    }

    actions
}
