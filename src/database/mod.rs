// ABOUTME: SQLite storage for the recipe service
// ABOUTME: Opens the connection pool and exposes the recipe manager
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Management
//!
//! The recipe service keeps its records in a single `SQLite` table. List
//! columns (ingredients, instructions, tags) and the nutrition object are
//! stored as JSON text.

/// Recipe table operations
pub mod recipes;

pub use recipes::RecipeManager;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Open a connection pool, creating the database file and its directory if needed
///
/// # Errors
///
/// Returns `DatabaseError` if the directory cannot be created or the database
/// cannot be opened
pub async fn connect(database: &DatabaseUrl) -> AppResult<SqlitePool> {
    if let DatabaseUrl::SQLite { path } = database {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let options = SqliteConnectOptions::from_str(&database.to_connection_string())
        .map_err(|e| AppError::database(format!("Invalid database URL {database}: {e}")))?
        .create_if_missing(true);

    let pool = pool_options(database)
        .connect_with(options)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database {database}: {e}")))?;

    info!(database = %database, "Database connection established");
    Ok(pool)
}

/// Pool sizing for a database location
///
/// Every connection to `:memory:` opens its own empty database, so an
/// in-memory pool holds exactly one connection and never recycles it.
fn pool_options(database: &DatabaseUrl) -> SqlitePoolOptions {
    let options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(30));
    if database.is_memory() {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options.max_connections(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_memory_pool_keeps_its_only_connection() {
        let options = pool_options(&DatabaseUrl::Memory);
        assert_eq!(options.get_max_connections(), 1);
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }

    #[test]
    fn test_file_pool_allows_several_connections() {
        let options = pool_options(&DatabaseUrl::SQLite {
            path: PathBuf::from("./data/recipes.db"),
        });
        assert_eq!(options.get_max_connections(), 5);
        assert!(options.get_idle_timeout().is_some());
    }
}
