// ABOUTME: Application constants re-exported from meal-planner-core
// ABOUTME: Environment variable names, defaults, endpoints, retry limits and grid dimensions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub use meal_planner_core::constants::*;
