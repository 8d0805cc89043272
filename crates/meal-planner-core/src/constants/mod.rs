// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment variable names, defaults and limits for the meal planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Environment variable names
pub mod env_config {
    /// Base URL of the remote recipe API used by the client
    pub const API_URL: &str = "MEAL_PLANNER_API_URL";
    /// Request timeout for the API client, in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "MEAL_PLANNER_HTTP_TIMEOUT_SECS";
    /// Bind host for the recipe service
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port for the recipe service
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Database connection string for the recipe service
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Comma-separated list of allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Default configuration values
pub mod defaults {
    /// Hosted recipe API the web client was deployed against
    pub const API_URL: &str = "https://meal-planner-xaci.onrender.com";
    /// Client request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Service bind host
    pub const HTTP_HOST: &str = "0.0.0.0";
    /// Service bind port
    pub const HTTP_PORT: u16 = 5000;
    /// Service database location
    pub const DATABASE_URL: &str = "sqlite:./data/meal_planner.db";
}

/// Service names used in structured logging
pub mod service_names {
    /// Recipe API service
    pub const MEAL_PLANNER_SERVER: &str = "meal-planner-server";
    /// Command-line client
    pub const MEAL_PLANNER_CLI: &str = "meal-planner-cli";
}

/// Network behaviour of the API client
pub mod network {
    /// Attempts made for a single API call (first try plus one retry)
    pub const MAX_ATTEMPTS: u32 = 2;
    /// Pause between the first failure and the retry, in milliseconds
    pub const RETRY_DELAY_MS: u64 = 250;
}

/// API routes
pub mod endpoints {
    /// Recipe collection
    pub const RECIPES: &str = "/recipes";
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
}

/// Schedule shape
pub mod schedule {
    /// Days in a schedule week
    pub const DAYS_PER_WEEK: usize = 7;
    /// Meal slots per day
    pub const SLOTS_PER_DAY: usize = 3;
    /// Total number of schedule cells
    pub const CELL_COUNT: usize = DAYS_PER_WEEK * SLOTS_PER_DAY;
}
