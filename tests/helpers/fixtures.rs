// ABOUTME: Recipe service fixtures shared by integration tests
// ABOUTME: Builds in-memory service resources, sample recipes and a live server on a random port
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use meal_planner::{
    config::{DatabaseUrl, ServerConfig},
    models::{MealType, NewRecipe, Nutrition},
    server::{self, ServerResources},
};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Service resources over a fresh in-memory database
pub async fn test_resources() -> Arc<ServerResources> {
    let config = ServerConfig {
        database: DatabaseUrl::Memory,
        ..ServerConfig::default()
    };
    Arc::new(
        ServerResources::from_config(config)
            .await
            .expect("Failed to create in-memory resources"),
    )
}

/// Serve the full router on 127.0.0.1 with an ephemeral port; returns the base URL
#[allow(dead_code)]
pub async fn spawn_server(resources: Arc<ServerResources>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, server::router(resources))
            .await
            .expect("Test server failed");
    });

    format!("http://{address}")
}

/// Breakfast recipe with full nutrition
#[allow(dead_code)]
pub fn oatmeal() -> NewRecipe {
    NewRecipe {
        name: "Oatmeal".to_owned(),
        meal_type: Some(MealType::Breakfast),
        ingredients: vec!["Oats".to_owned(), "Milk".to_owned()],
        instructions: vec!["Cook".to_owned()],
        tags: vec!["quick".to_owned()],
        nutrition: Some(Nutrition::from_values(300.0, 10.0, 50.0, 5.0)),
    }
}

/// Lunch recipe without nutrition
#[allow(dead_code)]
pub fn garden_salad() -> NewRecipe {
    NewRecipe {
        name: "Garden Salad".to_owned(),
        meal_type: Some(MealType::Lunch),
        ingredients: vec!["Lettuce".to_owned(), "Tomato".to_owned()],
        instructions: vec!["Chop".to_owned(), "Toss".to_owned()],
        tags: vec!["vegan".to_owned(), "quick".to_owned()],
        nutrition: None,
    }
}
