// ABOUTME: Configuration module for the meal planner
// ABOUTME: Environment-only settings for the recipe service and the API client
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Environment variable parsing into typed configuration
pub mod environment;

pub use environment::{ClientConfig, CorsConfig, DatabaseUrl, ServerConfig};
