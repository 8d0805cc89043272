// ABOUTME: Recipe service binary serving the recipe REST API over SQLite
// ABOUTME: Loads configuration from the environment, applies flag overrides and serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Meal Planner Recipe Service
//!
//! Serves `GET/POST /recipes` and `GET/PUT/DELETE /recipes/{id}` for the
//! planner client.

use anyhow::Result;
use clap::Parser;
use meal_planner::{
    config::{DatabaseUrl, ServerConfig},
    logging,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "meal-planner-server")]
#[command(about = "Meal Planner recipe service - REST API for recipes backed by SQLite")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override database URL (e.g. sqlite:./data/meal_planner.db)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(url) = args.database_url {
        config.database = DatabaseUrl::parse_url(&url)?;
    }

    logging::init_from_env()?;

    info!("Starting Meal Planner recipe service");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config).await?);
    let count = resources.recipes.count().await?;
    info!(recipes = count, "Recipe store ready");

    if let Err(e) = server::serve(resources).await {
        error!(error = %e, "Recipe service failed");
        return Err(e.into());
    }

    Ok(())
}
