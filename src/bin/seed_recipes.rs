// ABOUTME: Sample recipe seeding utility for the meal planner recipe service
// ABOUTME: Inserts a few starter recipes so the planner has something to show
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample recipe seeder.
//!
//! Usage:
//! ```bash
//! # Seed sample recipes (uses DATABASE_URL from environment)
//! cargo run --bin seed-recipes
//!
//! # Override database URL
//! cargo run --bin seed-recipes -- --database-url sqlite:./data/meal_planner.db
//!
//! # Force re-seed (replaces previously seeded samples)
//! cargo run --bin seed-recipes -- --force
//! ```

use anyhow::Result;
use clap::Parser;
use meal_planner::{
    config::{DatabaseUrl, ServerConfig},
    database::RecipeManager,
    models::{MealType, NewRecipe, Nutrition},
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-recipes",
    about = "Meal Planner sample recipe seeder",
    long_about = "Insert the starter recipes into the recipe service database"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Seed even if recipes already exist, replacing earlier samples
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

struct SampleRecipe {
    name: &'static str,
    meal_type: MealType,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
    tags: &'static [&'static str],
    nutrition: Option<[f64; 4]>,
}

const SAMPLE_RECIPES: &[SampleRecipe] = &[
    SampleRecipe {
        name: "Vegan Chili",
        meal_type: MealType::Dinner,
        ingredients: &["beans", "tomatoes", "onion", "bell pepper"],
        instructions: &["Cook all ingredients together."],
        tags: &["vegan", "gluten-free"],
        nutrition: Some([350.0, 12.0, 45.0, 10.0]),
    },
    SampleRecipe {
        name: "Pancakes",
        meal_type: MealType::Breakfast,
        ingredients: &["flour", "milk", "egg", "baking powder"],
        instructions: &["Mix and fry."],
        tags: &["vegetarian"],
        nutrition: None,
    },
    SampleRecipe {
        name: "Chicken Salad",
        meal_type: MealType::Lunch,
        ingredients: &["chicken", "lettuce", "tomato", "cucumber"],
        instructions: &["Mix all ingredients."],
        tags: &["gluten-free"],
        nutrition: Some([350.0, 12.0, 45.0, 10.0]),
    },
];

impl SampleRecipe {
    fn to_new_recipe(&self) -> NewRecipe {
        let owned = |items: &[&str]| items.iter().map(|s| (*s).to_owned()).collect();
        NewRecipe {
            name: self.name.to_owned(),
            meal_type: Some(self.meal_type),
            ingredients: owned(self.ingredients),
            instructions: owned(self.instructions),
            tags: owned(self.tags),
            nutrition: self
                .nutrition
                .map(|[calories, protein, carbs, fat]| {
                    Nutrition::from_values(calories, protein, carbs, fat)
                }),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Meal Planner Sample Recipe Seeder ===");

    let database = match args.database_url.as_deref() {
        Some(url) => DatabaseUrl::parse_url(url)?,
        None => ServerConfig::from_env()?.database,
    };

    info!("Connecting to database: {}", database);
    let recipes = RecipeManager::connect(&database).await?;

    let existing = recipes.count().await?;
    if existing > 0 && !args.force {
        info!(
            "Recipes already present ({} stored). Use --force to re-seed.",
            existing
        );
        return Ok(());
    }

    if args.force {
        let mut removed = 0;
        for recipe in recipes.list().await? {
            if SAMPLE_RECIPES.iter().any(|s| s.name == recipe.name) {
                recipes.delete(&recipe.id).await?;
                removed += 1;
            }
        }
        info!("Removed {} previously seeded recipes", removed);
    }

    info!("Seeding {} sample recipes...", SAMPLE_RECIPES.len());
    for sample in SAMPLE_RECIPES {
        let recipe = recipes.create(sample.to_new_recipe()).await?;
        info!("Inserted recipe with id: {}", recipe.id);
    }

    info!("=== Seeding Complete ===");
    Ok(())
}
