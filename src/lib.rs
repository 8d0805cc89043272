// ABOUTME: Main library entry point for the meal planner
// ABOUTME: Planner state container, recipe API client and the SQLite-backed recipe service
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Meal Planner
//!
//! A recipe manager with a weekly meal schedule assembled by drag and drop.
//!
//! ## Architecture
//!
//! - **State**: `PlannerState` holds the recipe store, the recipe draft, the
//!   7x3 schedule and view state; every change is a pure `reduce(Action)`
//! - **Planner**: pairs the state with a `RecipeApi` and performs the two
//!   network effects (initial fetch and draft submission)
//! - **Client**: `reqwest` implementation of `RecipeApi`
//! - **Service**: axum routes over a `SQLite` recipe table
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use meal_planner::client::HttpRecipeClient;
//! use meal_planner::config::ClientConfig;
//! use meal_planner::planner::Planner;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = HttpRecipeClient::new(ClientConfig::from_env()?)?;
//! let mut planner = Planner::new(client);
//! planner.load().await?;
//! println!("{} recipes", planner.state().recipes().len());
//! # Ok(())
//! # }
//! ```

/// Recipe API client
pub mod client;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// `SQLite` recipe storage
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Recipe and schedule data models
pub mod models;

/// Planner session
pub mod planner;

/// HTTP route handlers
pub mod routes;

/// Recipe service assembly
pub mod server;

/// Planner state container
pub mod state;
