// ABOUTME: In-memory recipe collection mirrored from the recipe service
// ABOUTME: Keeps insertion order, derives the distinct tag set and answers text searches
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::models::{Recipe, RecipeId};
use std::collections::HashSet;

/// Recipes fetched from (or created through) the recipe service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    tags: Vec<String>,
}

impl RecipeStore {
    /// Build a store from a fetched collection
    #[must_use]
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut store = Self::default();
        store.replace(recipes);
        store
    }

    /// Replace the whole collection and recompute the tag set
    pub fn replace(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        self.tags = distinct_tags(&self.recipes);
    }

    /// Append a newly created recipe and merge its tags
    pub fn push(&mut self, recipe: Recipe) {
        for tag in &recipe.tags {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }
        self.recipes.push(recipe);
    }

    /// Look up a recipe by identity
    #[must_use]
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// All recipes in insertion order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Distinct tags across all recipes, in first-seen order
    #[must_use]
    pub fn all_tags(&self) -> &[String] {
        &self.tags
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when no recipe is loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes whose name, an ingredient or a tag contains `query`, ignoring case
    ///
    /// An empty query matches everything. Store order is preserved.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        if query.is_empty() {
            return self.recipes.iter().collect();
        }

        let needle = query.to_lowercase();
        let contains = |text: &str| text.to_lowercase().contains(&needle);

        self.recipes
            .iter()
            .filter(|r| {
                contains(&r.name)
                    || r.ingredients.iter().any(|i| contains(i))
                    || r.tags.iter().any(|t| contains(t))
            })
            .collect()
    }
}

fn distinct_tags(recipes: &[Recipe]) -> Vec<String> {
    let mut seen = HashSet::new();
    recipes
        .iter()
        .flat_map(|r| r.tags.iter())
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewRecipe;

    fn recipe(id: &str, name: &str, ingredients: &[&str], tags: &[&str]) -> Recipe {
        Recipe::from_new(
            RecipeId::new(id),
            NewRecipe {
                name: name.into(),
                ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
                instructions: vec!["cook".into()],
                tags: tags.iter().map(|s| (*s).to_owned()).collect(),
                ..NewRecipe::default()
            },
        )
    }

    fn sample_store() -> RecipeStore {
        RecipeStore::from_recipes(vec![
            recipe("1", "Vegan Chili", &["beans", "tomatoes"], &["vegan", "gluten-free"]),
            recipe("2", "Pancakes", &["flour", "milk"], &["vegetarian"]),
            recipe("3", "Chicken Salad", &["chicken", "Tomato"], &["gluten-free"]),
        ])
    }

    #[test]
    fn test_tags_are_distinct_in_first_seen_order() {
        let store = sample_store();
        assert_eq!(store.all_tags(), ["vegan", "gluten-free", "vegetarian"]);
    }

    #[test]
    fn test_push_merges_new_tags_only() {
        let mut store = sample_store();
        store.push(recipe("4", "Oatmeal", &["oats"], &["breakfast", "vegan"]));

        assert_eq!(store.len(), 4);
        assert_eq!(
            store.all_tags(),
            ["vegan", "gluten-free", "vegetarian", "breakfast"]
        );
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let store = sample_store();
        let names: Vec<&str> = store.search("").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Vegan Chili", "Pancakes", "Chicken Salad"]);
    }

    #[test]
    fn test_search_matches_name_ingredient_and_tag_case_insensitively() {
        let store = sample_store();

        let by_name: Vec<&str> = store.search("PAN").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(by_name, ["2"]);

        let by_ingredient: Vec<&str> = store.search("tomato").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(by_ingredient, ["1", "3"]);

        let by_tag: Vec<&str> = store.search("Gluten").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(by_tag, ["1", "3"]);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(sample_store().search("sushi").is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let store = sample_store();
        assert_eq!(store.get(&RecipeId::new("2")).map(|r| r.name.as_str()), Some("Pancakes"));
        assert!(store.get(&RecipeId::new("missing")).is_none());
    }
}
