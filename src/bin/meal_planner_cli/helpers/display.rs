// ABOUTME: Output formatting helpers for meal-planner-cli
// ABOUTME: Renders recipe lists, recipe details and the weekly plan with nutrition totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use meal_planner::{
    models::{Day, Nutrient, Recipe},
    state::{day_totals, week_totals, NutritionTotals, Schedule},
};
use serde_json::{json, Value};

/// Display recipe names with their IDs
pub fn display_recipe_list(recipes: &[&Recipe], search: &str) {
    if recipes.is_empty() {
        if search.is_empty() {
            println!("No recipes found");
        } else {
            println!("No recipes match '{search}'");
        }
        return;
    }

    println!("{:<38} {:<10} NAME", "ID", "MEAL");
    println!("{}", "-".repeat(70));
    for recipe in recipes {
        let meal = recipe.meal_type.map_or("-", |m| m.as_str());
        println!("{:<38} {:<10} {}", recipe.id, meal, recipe.name);
    }
    println!("\n{} recipe(s)", recipes.len());
}

/// Display a recipe's full detail
pub fn display_recipe(recipe: &Recipe) {
    println!("{}", recipe.name);
    println!("{}", "=".repeat(50));
    println!("   ID: {}", recipe.id);
    if let Some(meal_type) = recipe.meal_type {
        println!("   Meal type: {meal_type}");
    }
    if !recipe.tags.is_empty() {
        println!("   Tags: {}", recipe.tags.join(", "));
    }

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        println!("  • {ingredient}");
    }

    println!("\nInstructions:");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {instruction}", step + 1);
    }

    if let Some(nutrition) = recipe.nutrition.as_ref().filter(|n| !n.is_empty()) {
        println!("\nNutrition:");
        for nutrient in Nutrient::ALL {
            if let Some(amount) = nutrition.get(nutrient) {
                println!(
                    "   {}: {amount}{}",
                    capitalize(nutrient.as_str()),
                    nutrient.unit()
                );
            }
        }
    }
}

/// Display the 7x3 grid followed by each day's totals
pub fn display_week(schedule: &Schedule) {
    for day in Day::ALL {
        println!("{day}");
        for (slot, recipe) in schedule.day(day) {
            let name = recipe.map_or("(empty)", |r| r.name.as_str());
            println!("   {:<10} {name}", slot.as_str());
        }
        println!("   {}", format_totals(&day_totals(schedule, day)));
    }
}

/// The plan as JSON: each day's cells and totals
pub fn week_json(schedule: &Schedule) -> Value {
    let days: Vec<Value> = week_totals(schedule)
        .into_iter()
        .map(|(day, totals)| {
            let meals: serde_json::Map<String, Value> = schedule
                .day(day)
                .map(|(slot, recipe)| {
                    let cell = recipe.map_or(Value::Null, |r| {
                        json!({ "_id": r.id, "name": r.name })
                    });
                    (slot.as_str().to_owned(), cell)
                })
                .collect();
            json!({
                "day": day.as_str(),
                "meals": meals,
                "totals": totals,
            })
        })
        .collect();

    json!({ "days": days, "planned": schedule.filled() })
}

fn format_totals(totals: &NutritionTotals) -> String {
    Nutrient::ALL
        .iter()
        .map(|&n| {
            format!(
                "{}: {}{}",
                capitalize(n.as_str()),
                totals.get(n),
                n.unit()
            )
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
