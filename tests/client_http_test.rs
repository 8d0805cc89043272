// ABOUTME: Integration tests for the reqwest recipe client against a live in-process service
// ABOUTME: Verifies list, create, get, update, delete, retries and error mapping over real HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use helpers::fixtures::{garden_salad, oatmeal, spawn_server, test_resources};
use meal_planner::{
    client::{HttpRecipeClient, RecipeApi},
    config::ClientConfig,
    errors::ErrorCode,
    models::{NewRecipe, RecipeUpdate},
    planner::Planner,
    state::{Action, DraftAction, ListField, Status},
};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::net::TcpListener;

fn client_for(base_url: &str) -> HttpRecipeClient {
    HttpRecipeClient::new(ClientConfig::new(base_url).unwrap()).unwrap()
}

/// Serve an arbitrary router and return its base URL
async fn spawn_router(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{address}")
}

#[tokio::test]
async fn test_create_and_list_round_trip() {
    let base_url = spawn_server(test_resources().await).await;
    let client = client_for(&format!("{base_url}/"));
    assert_eq!(client.base_url(), base_url);

    assert!(client.list_recipes().await.unwrap().is_empty());

    let first = client.create_recipe(&oatmeal()).await.unwrap();
    let second = client.create_recipe(&garden_salad()).await.unwrap();
    assert_ne!(first, second);

    let recipes = client.list_recipes().await.unwrap();
    let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Oatmeal", "Garden Salad"]);

    let fetched = client.get_recipe(&first).await.unwrap();
    assert_eq!(fetched.ingredients, vec!["Oats", "Milk"]);
}

#[tokio::test]
async fn test_update_and_delete() {
    let base_url = spawn_server(test_resources().await).await;
    let client = client_for(&base_url);
    let id = client.create_recipe(&oatmeal()).await.unwrap();

    let update = RecipeUpdate {
        name: Some("Steel-cut Oats".to_owned()),
        ..RecipeUpdate::default()
    };
    let message = client.update_recipe(&id, &update).await.unwrap();
    assert_eq!(message, format!("Recipe {id} updated successfully"));
    assert_eq!(client.get_recipe(&id).await.unwrap().name, "Steel-cut Oats");

    client.delete_recipe(&id).await.unwrap();
    let err = client.get_recipe(&id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.message, "Recipe not found");
}

#[tokio::test]
async fn test_validation_error_keeps_server_message() {
    let base_url = spawn_server(test_resources().await).await;
    let client = client_for(&base_url);

    let invalid = NewRecipe {
        name: "Nothing inside".to_owned(),
        ..NewRecipe::default()
    };
    let err = client.create_recipe(&invalid).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.message, "ingredients is required");
}

#[tokio::test]
async fn test_legacy_error_body_is_understood() {
    let router = Router::new().route(
        "/recipes",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "database offline" })),
            )
        }),
    );
    let client = client_for(&spawn_router(router).await);

    let err = client.list_recipes().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("database offline"), "{}", err.message);
}

#[tokio::test]
async fn test_unreachable_service_fails_planner_load() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{address}"));
    let mut planner = Planner::new(client);

    let err = planner.load().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(matches!(planner.state().status(), Status::Failed(_)));
}

#[tokio::test]
async fn test_planner_submit_over_http() {
    let base_url = spawn_server(test_resources().await).await;
    let mut planner = Planner::new(client_for(&base_url));
    planner.load().await.unwrap();

    for action in [
        DraftAction::SetName("Toast".to_owned()),
        DraftAction::SetRow {
            field: ListField::Ingredients,
            index: 0,
            text: "Bread".to_owned(),
        },
        DraftAction::SetRow {
            field: ListField::Instructions,
            index: 0,
            text: "Toast it".to_owned(),
        },
    ] {
        planner.dispatch(Action::Draft(action)).unwrap();
    }

    let id = planner.submit().await.unwrap();
    assert_eq!(planner.state().recipes().get(&id).unwrap().name, "Toast");

    let stored = planner.api().get_recipe(&id).await.unwrap();
    assert_eq!(stored.instructions, vec!["Toast it"]);
}

/// Answers 503 for the first `failures` hits, then `body`
fn flaky(
    hits: &Arc<AtomicUsize>,
    failures: usize,
    body: Value,
) -> impl Fn() -> std::future::Ready<(StatusCode, Json<Value>)> + Clone + Send + Sync + 'static {
    let hits = Arc::clone(hits);
    move || {
        let hit = hits.fetch_add(1, Ordering::SeqCst);
        let reply = if hit < failures {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": "warming up" })),
            )
        } else {
            (StatusCode::OK, Json(body.clone()))
        };
        std::future::ready(reply)
    }
}

#[tokio::test]
async fn test_list_retries_once_after_server_error() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route("/recipes", get(flaky(&hits, 1, json!([]))));
    let client = client_for(&spawn_router(router).await);

    let recipes = client.list_recipes().await.unwrap();
    assert!(recipes.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_list_gives_up_after_second_failure() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route("/recipes", get(flaky(&hits, usize::MAX, json!([]))));
    let client = client_for(&spawn_router(router).await);

    let err = client.list_recipes().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_create_is_not_resent_after_server_error() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route(
        "/recipes",
        post(flaky(&hits, 1, json!({ "id": "late", "message": "created" }))),
    );
    let client = client_for(&spawn_router(router).await);

    let err = client.create_recipe(&oatmeal()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_list_tolerates_null_tags() {
    let router = Router::new().route(
        "/recipes",
        get(|| async {
            Json(json!([
                { "_id": "a", "name": "Chili", "ingredients": ["beans"], "tags": ["x"] },
                { "_id": "b", "name": "Toast", "ingredients": null, "tags": null }
            ]))
        }),
    );
    let client = client_for(&spawn_router(router).await);

    let recipes = client.list_recipes().await.unwrap();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].tags, vec!["x"]);
    assert!(recipes[1].tags.is_empty());
}
