// ABOUTME: Core types and constants for the meal planner workspace
// ABOUTME: Foundation crate with error handling, recipe and schedule models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Meal Planner Core
//!
//! Foundation crate providing shared types for the meal planner. The service,
//! the API client and the planner state container all speak these types, so
//! this crate is kept free of I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Recipes, nutrition values, days and meal slots
//! - **constants**: Environment variable names, defaults and limits

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (Recipe, Nutrition, Day, `MealSlot`)
pub mod models;

/// Application constants organized by domain
pub mod constants;
