// ABOUTME: Core data models shared by the recipe service, API client and planner state
// ABOUTME: Re-exports recipe records, nutrition values and schedule coordinates
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! - `Recipe` / `NewRecipe` / `RecipeUpdate`: recipe records in their stored,
//!   submitted and partially-updated shapes
//! - `Nutrition` / `NutrientAmount`: lenient nutrition facts
//! - `Day` / `MealSlot` / `SlotKey`: coordinates of the weekly schedule grid

mod recipe;
mod schedule;

pub use recipe::{
    MealType, NewRecipe, Nutrient, NutrientAmount, Nutrition, Recipe, RecipeId, RecipeUpdate,
};
pub use schedule::{Day, MealSlot, SlotKey};
