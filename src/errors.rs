// ABOUTME: Unified error types re-exported from meal-planner-core
// ABOUTME: AppError, ErrorCode and the HTTP error envelope used by the service and the client
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Error Handling
//!
//! The definitions live in the core crate so the models can return them too.

pub use meal_planner_core::errors::*;
