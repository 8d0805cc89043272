// ABOUTME: Integration tests for the SQLite recipe store
// ABOUTME: Covers schema creation, CRUD, ordering and persistence across reconnects
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::fixtures::{garden_salad, oatmeal};
use meal_planner::{
    config::DatabaseUrl,
    database::RecipeManager,
    models::{MealType, Nutrient, NutrientAmount, Nutrition, RecipeId, RecipeUpdate},
};
use tempfile::TempDir;

async fn memory_store() -> RecipeManager {
    RecipeManager::connect(&DatabaseUrl::Memory).await.unwrap()
}

#[tokio::test]
async fn test_create_assigns_fresh_ids() {
    let store = memory_store().await;

    let a = store.create(oatmeal()).await.unwrap();
    let b = store.create(oatmeal()).await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_get_round_trips_every_field() {
    let store = memory_store().await;
    let created = store.create(oatmeal()).await.unwrap();

    let fetched = store.get(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.meal_type, Some(MealType::Breakfast));
    assert_eq!(fetched.tags, vec!["quick"]);
    assert!((fetched.nutrient(Nutrient::Carbs) - 50.0).abs() < f64::EPSILON);

    assert!(store.get(&RecipeId::from("nope")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_text_nutrition_survives_storage() {
    let store = memory_store().await;
    let mut recipe = garden_salad();
    recipe.nutrition = Some(Nutrition {
        calories: Some(NutrientAmount::Text("about 120".to_owned())),
        ..Nutrition::default()
    });

    let created = store.create(recipe).await.unwrap();
    let fetched = store.get(&created.id).await.unwrap().unwrap();
    assert_eq!(
        fetched.nutrition.unwrap().calories,
        Some(NutrientAmount::Text("about 120".to_owned()))
    );
}

#[tokio::test]
async fn test_list_in_insertion_order() {
    let store = memory_store().await;
    let first = store.create(garden_salad()).await.unwrap();
    let second = store.create(oatmeal()).await.unwrap();

    let ids: Vec<RecipeId> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn test_update_and_delete() {
    let store = memory_store().await;
    let created = store.create(oatmeal()).await.unwrap();

    let update = RecipeUpdate {
        meal_type: Some(MealType::Snack),
        ingredients: Some(vec!["Oats".to_owned()]),
        ..RecipeUpdate::default()
    };
    let updated = store.update(&created.id, update).await.unwrap().unwrap();
    assert_eq!(updated.meal_type, Some(MealType::Snack));
    assert_eq!(updated.ingredients, vec!["Oats"]);
    assert_eq!(updated.name, "Oatmeal");

    let missing = store
        .update(&RecipeId::from("nope"), RecipeUpdate::default())
        .await
        .unwrap();
    assert!(missing.is_none());

    assert!(store.delete(&created.id).await.unwrap());
    assert!(!store.delete(&created.id).await.unwrap());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_file_database_persists() {
    let dir = TempDir::new().unwrap();
    let database = DatabaseUrl::SQLite {
        path: dir.path().join("nested").join("recipes.db"),
    };

    let id = {
        let store = RecipeManager::connect(&database).await.unwrap();
        store.create(oatmeal()).await.unwrap().id
    };

    let reopened = RecipeManager::connect(&database).await.unwrap();
    let recipe = reopened.get(&id).await.unwrap().unwrap();
    assert_eq!(recipe.name, "Oatmeal");
}
