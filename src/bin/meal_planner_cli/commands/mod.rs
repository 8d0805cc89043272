// ABOUTME: Re-exports command modules for meal-planner-cli
// ABOUTME: Provides access to recipe, tag and plan commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod plan;
pub mod recipes;
pub mod tags;
