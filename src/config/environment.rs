// ABOUTME: Environment configuration for the recipe service and the API client
// ABOUTME: Parses environment variables into typed ClientConfig and ServerConfig values
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration
//!
//! There are no configuration files: every setting comes from the process
//! environment with a hardcoded default, and command-line flags override it.

use crate::constants::{defaults, env_config};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Recipe API client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the recipe API, without trailing slash
    pub api_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a client configuration for an explicit base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or is not http(s)
    pub fn new(api_url: &str) -> Result<Self> {
        Ok(Self {
            api_url: parse_base_url(api_url)?,
            timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
        })
    }

    /// Load client configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `MEAL_PLANNER_API_URL` or the timeout are malformed
    pub fn from_env() -> Result<Self> {
        let api_url = env_var_or(env_config::API_URL, defaults::API_URL);
        let timeout_secs: u64 = env_var_or(
            env_config::HTTP_TIMEOUT_SECS,
            &defaults::HTTP_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .with_context(|| format!("Invalid {} value", env_config::HTTP_TIMEOUT_SECS))?;

        Ok(Self {
            api_url: parse_base_url(&api_url)?,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Base URL as text, without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_url.as_str().trim_end_matches('/')
    }
}

/// Parse and normalise an API base URL
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).with_context(|| format!("Invalid API URL '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("API URL must use http or https, got '{}'", url.scheme());
    }
    Ok(url)
}

/// Database location for the recipe service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` database (tests and throwaway runs)
    Memory,
}

impl DatabaseUrl {
    /// Parse a database URL string
    ///
    /// # Errors
    ///
    /// Returns an error for schemes other than `sqlite:`
    pub fn parse_url(s: &str) -> Result<Self> {
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            let path_str = path_str.trim_start_matches("//");
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.contains("://") {
            anyhow::bail!("Unsupported database URL '{s}': only sqlite is available")
        } else {
            // Bare path
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/meal_planner.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Allowed origins; empty or `["*"]` means any origin
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// True when every origin is accepted
    #[must_use]
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Recipe service configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub http_port: u16,
    /// Recipe store location
    pub database: DatabaseUrl,
    /// Cross-origin settings for the web client
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HTTP_HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            database: DatabaseUrl::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load service configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the port or database URL are malformed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = env_var_or(env_config::HTTP_PORT, &defaults::HTTP_PORT.to_string())
            .parse()
            .with_context(|| format!("Invalid {} value", env_config::HTTP_PORT))?;

        Ok(Self {
            host: env_var_or(env_config::HTTP_HOST, defaults::HTTP_HOST),
            http_port,
            database: DatabaseUrl::parse_url(&env_var_or(
                env_config::DATABASE_URL,
                defaults::DATABASE_URL,
            ))?,
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or(
                    env_config::CORS_ALLOWED_ORIGINS,
                    "*",
                )),
            },
        })
    }

    /// Socket address the service binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line-per-setting summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Meal Planner Server Configuration:\n\
             - Bind: {}\n\
             - Database: {}\n\
             - CORS: {}",
            self.bind_address(),
            self.database,
            if self.cors.allows_any() {
                "any origin".to_owned()
            } else {
                self.cors.allowed_origins.join(", ")
            }
        )
    }
}

/// Environment variable with a fallback
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:3000, https://meal-planner.example.com ,"),
            vec!["http://localhost:3000", "https://meal-planner.example.com"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_database_url_parsing() {
        let file = DatabaseUrl::parse_url("sqlite:./recipes.db").unwrap();
        assert_eq!(file.to_connection_string(), "sqlite:./recipes.db");
        assert!(!file.is_memory());

        let memory = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
        assert!(memory.is_memory());

        let bare = DatabaseUrl::parse_url("data/recipes.db").unwrap();
        assert_eq!(bare.to_connection_string(), "sqlite:data/recipes.db");

        assert!(DatabaseUrl::parse_url("mongodb://localhost:27017/").is_err());
    }

    #[test]
    fn test_client_config_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:5000/").unwrap();
        assert_eq!(config.base_url(), "http://localhost:5000");

        assert!(ClientConfig::new("ftp://example.com").is_err());
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn test_cors_any() {
        assert!(CorsConfig::default().allows_any());
        assert!(CorsConfig {
            allowed_origins: vec!["*".into()]
        }
        .allows_any());
        assert!(!CorsConfig {
            allowed_origins: vec!["https://a.example".into()]
        }
        .allows_any());
    }
}
