// ABOUTME: Recipe and schedule models re-exported from meal-planner-core
// ABOUTME: Recipe, NewRecipe, RecipeUpdate, Nutrition, Day, MealSlot and SlotKey
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models

pub use meal_planner_core::models::*;
