// ABOUTME: Database operations for stored recipes
// ABOUTME: Handles schema creation and CRUD with JSON-encoded list and nutrition columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use crate::models::{MealType, NewRecipe, Nutrition, Recipe, RecipeId, RecipeUpdate};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

/// Database manager for recipe records
#[derive(Debug, Clone)]
pub struct RecipeManager {
    pool: SqlitePool,
}

impl RecipeManager {
    /// Create a new recipe manager over an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database and make sure the schema exists
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn connect(database: &DatabaseUrl) -> AppResult<Self> {
        let manager = Self::new(super::connect(database).await?);
        manager.migrate().await?;
        Ok(manager)
    }

    /// Create the recipes table
    ///
    /// # Errors
    ///
    /// Returns an error if table creation fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                meal_type TEXT,
                ingredients TEXT NOT NULL DEFAULT '[]',
                instructions TEXT NOT NULL DEFAULT '[]',
                tags TEXT NOT NULL DEFAULT '[]',
                nutrition TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipes table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_name ON recipes(name)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create recipes index: {e}")))?;

        Ok(())
    }

    /// Every recipe in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded
    pub async fn list(&self) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, meal_type, ingredients, instructions, tags, nutrition
            FROM recipes
            ORDER BY rowid
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        rows.iter().map(row_to_recipe).collect()
    }

    /// Get a recipe by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded
    pub async fn get(&self, id: &RecipeId) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id, name, meal_type, ingredients, instructions, tags, nutrition
            FROM recipes
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get recipe: {e}")))?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    /// Store a new recipe under a fresh UUID
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the insert fails
    pub async fn create(&self, recipe: NewRecipe) -> AppResult<Recipe> {
        let recipe = Recipe::from_new(RecipeId::new(Uuid::new_v4().to_string()), recipe);
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r"
            INSERT INTO recipes (id, name, meal_type, ingredients, instructions, tags, nutrition,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(recipe.id.as_str())
        .bind(&recipe.name)
        .bind(recipe.meal_type.map(|m| m.as_str()))
        .bind(serde_json::to_string(&recipe.ingredients)?)
        .bind(serde_json::to_string(&recipe.instructions)?)
        .bind(serde_json::to_string(&recipe.tags)?)
        .bind(encode_nutrition(recipe.nutrition.as_ref())?)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipe: {e}")))?;

        debug!(recipe_id = %recipe.id, name = %recipe.name, "Stored recipe");
        Ok(recipe)
    }

    /// Replace the fields present in `update`
    ///
    /// Returns `None` when no recipe has this ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query, encoding or the update fails
    pub async fn update(&self, id: &RecipeId, update: RecipeUpdate) -> AppResult<Option<Recipe>> {
        let Some(mut recipe) = self.get(id).await? else {
            return Ok(None);
        };
        recipe.apply_update(update);

        sqlx::query(
            r"
            UPDATE recipes
            SET name = $1, meal_type = $2, ingredients = $3, instructions = $4, tags = $5,
                nutrition = $6, updated_at = $7
            WHERE id = $8
            ",
        )
        .bind(&recipe.name)
        .bind(recipe.meal_type.map(|m| m.as_str()))
        .bind(serde_json::to_string(&recipe.ingredients)?)
        .bind(serde_json::to_string(&recipe.instructions)?)
        .bind(serde_json::to_string(&recipe.tags)?)
        .bind(encode_nutrition(recipe.nutrition.as_ref())?)
        .bind(Utc::now().to_rfc3339())
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update recipe: {e}")))?;

        debug!(recipe_id = %id, "Updated recipe");
        Ok(Some(recipe))
    }

    /// Remove a recipe; returns whether one was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(&self, id: &RecipeId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete recipe: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of stored recipes
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM recipes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count recipes: {e}")))?;

        Ok(row.get("count"))
    }
}

fn encode_nutrition(nutrition: Option<&Nutrition>) -> AppResult<Option<String>> {
    nutrition
        .map(serde_json::to_string)
        .transpose()
        .map_err(AppError::from)
}

/// Convert a database row to a `Recipe`
fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let meal_type: Option<String> = row.get("meal_type");
    let ingredients_json: String = row.get("ingredients");
    let instructions_json: String = row.get("instructions");
    let tags_json: String = row.get("tags");
    let nutrition_json: Option<String> = row.get("nutrition");
    let id: String = row.get("id");

    Ok(Recipe {
        id: RecipeId::from(id),
        name: row.get("name"),
        meal_type: meal_type.as_deref().and_then(MealType::parse),
        ingredients: serde_json::from_str(&ingredients_json)?,
        instructions: serde_json::from_str(&instructions_json)?,
        tags: serde_json::from_str(&tags_json)?,
        nutrition: nutrition_json
            .map(|s| serde_json::from_str(&s))
            .transpose()?,
    })
}
