// ABOUTME: Route module organization for the recipe service HTTP endpoints
// ABOUTME: Groups recipe CRUD and health routes, each exposing a routes() builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module for the recipe service
//!
//! Each domain module holds only route definitions and thin handlers that
//! delegate to the database layer.

/// Welcome, health and readiness routes
pub mod health;
/// Recipe CRUD routes
pub mod recipes;

/// Health check route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::RecipeRoutes;
