// ABOUTME: Command-line client for the meal planner recipe API
// ABOUTME: Lists, shows, creates and deletes recipes and renders a weekly plan with nutrition totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Meal planner CLI
//!
//! Talks to the recipe API named by `MEAL_PLANNER_API_URL` (or `--api-url`).
//!
//! Usage:
//! ```bash
//! # List recipes, optionally filtered by a search
//! meal-planner-cli recipes list --search oat
//!
//! # Show one recipe
//! meal-planner-cli recipes show 3f1c...
//!
//! # Create a recipe
//! meal-planner-cli recipes create --name "Oatmeal" --meal-type breakfast \
//!     --ingredient "Oats" --ingredient "Milk" --instruction "Cook" \
//!     --tag quick --calories 300 --protein 10
//!
//! # Suggest existing tags
//! meal-planner-cli tags --input veg
//!
//! # Build a week plan and print daily totals
//! meal-planner-cli plan --assign monday:breakfast=3f1c... --move monday:breakfast=tuesday:lunch
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use meal_planner::{
    client::HttpRecipeClient,
    config::ClientConfig,
    constants::service_names,
    models::{MealType, RecipeId},
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "meal-planner-cli",
    about = "Meal Planner command-line client",
    long_about = "Browse and create recipes on a meal planner recipe API and plan a week of meals"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe API base URL (overrides `MEAL_PLANNER_API_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recipe commands
    Recipes {
        #[command(subcommand)]
        action: RecipesCommand,
    },

    /// Suggest existing tags matching some text
    Tags {
        /// Text to match (case-insensitive)
        #[arg(long, default_value = "")]
        input: String,
    },

    /// Lay recipes out on the weekly schedule and print nutrition totals
    Plan {
        /// Place a recipe in a cell: `day:slot=RECIPE_ID` (repeatable)
        #[arg(long = "assign", value_name = "CELL=ID")]
        assignments: Vec<String>,

        /// Move a placed recipe: `day:slot=day:slot` (repeatable, applied after assignments)
        #[arg(long = "move", value_name = "FROM=TO")]
        moves: Vec<String>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipesCommand {
    /// List recipes
    List {
        /// Only show recipes whose name, ingredients or tags contain this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one recipe
    Show {
        /// Recipe ID
        id: String,
    },

    /// Create a recipe
    Create(CreateArgs),

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: String,
    },
}

/// Fields of a new recipe
#[derive(clap::Args)]
struct CreateArgs {
    /// Recipe name
    #[arg(long)]
    name: String,

    /// Meal type (breakfast, lunch, dinner, snack)
    #[arg(long, value_parser = parse_meal_type)]
    meal_type: Option<MealType>,

    /// Ingredient line (repeatable)
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,

    /// Instruction step (repeatable)
    #[arg(long = "instruction")]
    instructions: Vec<String>,

    /// Tag (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Calories (kcal)
    #[arg(long)]
    calories: Option<String>,

    /// Protein (g)
    #[arg(long)]
    protein: Option<String>,

    /// Carbohydrates (g)
    #[arg(long)]
    carbs: Option<String>,

    /// Fat (g)
    #[arg(long)]
    fat: Option<String>,
}

fn parse_meal_type(s: &str) -> std::result::Result<MealType, String> {
    MealType::parse(s).ok_or_else(|| {
        format!("unknown meal type '{s}' (expected breakfast, lunch, dinner or snack)")
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = match cli.api_url.as_deref() {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    let client = HttpRecipeClient::new(config)?;
    debug!(
        service = service_names::MEAL_PLANNER_CLI,
        api_url = client.base_url(),
        "Using recipe API"
    );

    match cli.command {
        Command::Recipes { action } => match action {
            RecipesCommand::List { search } => {
                commands::recipes::list(client, search).await?;
            }
            RecipesCommand::Show { id } => {
                commands::recipes::show(client, RecipeId::from(id)).await?;
            }
            RecipesCommand::Create(args) => {
                let request = commands::recipes::CreateRequest {
                    name: args.name,
                    meal_type: args.meal_type,
                    ingredients: args.ingredients,
                    instructions: args.instructions,
                    tags: args.tags,
                    calories: args.calories,
                    protein: args.protein,
                    carbs: args.carbs,
                    fat: args.fat,
                };
                commands::recipes::create(client, request).await?;
            }
            RecipesCommand::Delete { id } => {
                commands::recipes::delete(&client, &RecipeId::from(id)).await?;
            }
        },
        Command::Tags { input } => {
            commands::tags::suggest(client, input).await?;
        }
        Command::Plan {
            assignments,
            moves,
            json,
        } => {
            commands::plan::run(client, &assignments, &moves, json).await?;
        }
    }

    Ok(())
}
