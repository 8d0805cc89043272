// ABOUTME: Unit tests for environment-driven configuration
// ABOUTME: Validates defaults, overrides and rejection of malformed client and service settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use meal_planner::{
    config::{ClientConfig, DatabaseUrl, ServerConfig},
    constants::{defaults, env_config},
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

fn clear_env() {
    for key in [
        env_config::API_URL,
        env_config::HTTP_TIMEOUT_SECS,
        env_config::HTTP_HOST,
        env_config::HTTP_PORT,
        env_config::DATABASE_URL,
        env_config::CORS_ALLOWED_ORIGINS,
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_client_defaults() {
    clear_env();

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.base_url(), defaults::API_URL);
    assert_eq!(
        config.timeout,
        Duration::from_secs(defaults::HTTP_TIMEOUT_SECS)
    );
}

#[test]
#[serial]
fn test_client_env_overrides() {
    clear_env();
    env::set_var(env_config::API_URL, "http://localhost:5000/");
    env::set_var(env_config::HTTP_TIMEOUT_SECS, "5");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.base_url(), "http://localhost:5000");
    assert_eq!(config.timeout, Duration::from_secs(5));

    clear_env();
}

#[test]
#[serial]
fn test_client_rejects_bad_values() {
    clear_env();
    env::set_var(env_config::HTTP_TIMEOUT_SECS, "soon");
    assert!(ClientConfig::from_env().is_err());

    clear_env();
    env::set_var(env_config::API_URL, "ftp://example.com");
    assert!(ClientConfig::from_env().is_err());

    clear_env();
}

#[test]
fn test_explicit_client_url() {
    assert!(ClientConfig::new("not a url").is_err());

    let config = ClientConfig::new("https://recipes.example.com/api/").unwrap();
    assert_eq!(config.base_url(), "https://recipes.example.com/api");
}

#[test]
#[serial]
fn test_server_defaults() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.bind_address(), "0.0.0.0:5000");
    assert_eq!(
        config.database,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/meal_planner.db")
        }
    );
    assert!(config.cors.allows_any());
    assert!(config.summary().contains("any origin"));
}

#[test]
#[serial]
fn test_server_env_overrides() {
    clear_env();
    env::set_var(env_config::HTTP_HOST, "127.0.0.1");
    env::set_var(env_config::HTTP_PORT, "8081");
    env::set_var(env_config::DATABASE_URL, "sqlite::memory:");
    env::set_var(
        env_config::CORS_ALLOWED_ORIGINS,
        "http://localhost:3000, https://planner.example.com",
    );

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.bind_address(), "127.0.0.1:8081");
    assert!(config.database.is_memory());
    assert!(!config.cors.allows_any());
    assert_eq!(
        config.cors.allowed_origins,
        vec!["http://localhost:3000", "https://planner.example.com"]
    );

    clear_env();
}

#[test]
#[serial]
fn test_server_rejects_bad_port_and_database() {
    clear_env();
    env::set_var(env_config::HTTP_PORT, "eighty");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var(env_config::DATABASE_URL, "postgresql://localhost/recipes");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
}
