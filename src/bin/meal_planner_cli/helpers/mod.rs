// ABOUTME: Re-exports helper modules for meal-planner-cli
// ABOUTME: Provides access to output formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod display;
