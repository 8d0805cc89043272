// ABOUTME: Recipe records as stored by the recipe service and held by the planner
// ABOUTME: Defines RecipeId, MealType, NutrientAmount, Nutrition, Recipe, NewRecipe and RecipeUpdate
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque recipe identifier assigned by the recipe service
///
/// The client never interprets the value; it only compares and echoes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Type of meal a recipe is intended for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Every meal type, in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parse a meal type, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" => Some(Self::Snack),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blank and unknown meal types read as "not chosen" instead of failing the record
fn deserialize_meal_type<'de, D>(deserializer: D) -> Result<Option<MealType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(MealType::parse))
}

/// Older records hold `null` where a list is expected
fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Legacy records store instructions as one string instead of a list of steps
fn deserialize_steps<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Steps {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<Steps>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Steps::One(step)) if step.trim().is_empty() => Vec::new(),
        Some(Steps::One(step)) => vec![step],
        Some(Steps::Many(steps)) => steps,
    })
}

/// A nutrition field as it arrives on the wire
///
/// The form keeps raw text while older records hold numbers, so both shapes
/// are accepted and read through [`NutrientAmount::value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutrientAmount {
    /// Numeric value
    Number(f64),
    /// Raw text, possibly blank or unparseable
    Text(String),
}

impl NutrientAmount {
    /// Numeric reading of this amount
    ///
    /// Blank, unparseable, non-finite and negative values all read as zero.
    #[must_use]
    pub fn value(&self) -> f64 {
        let parsed = match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
        };

        parsed.filter(|n| n.is_finite() && *n >= 0.0).unwrap_or(0.0)
    }

    /// Build an amount from form text: numbers when they parse, raw text otherwise, nothing when blank
    #[must_use]
    pub fn from_input(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(
            trimmed
                .parse::<f64>()
                .map_or_else(|_| Self::Text(trimmed.to_owned()), Self::Number),
        )
    }
}

impl From<f64> for NutrientAmount {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl fmt::Display for NutrientAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// The four tracked nutrition fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    /// Energy in kcal
    Calories,
    /// Protein in grams
    Protein,
    /// Carbohydrates in grams
    Carbs,
    /// Fat in grams
    Fat,
}

impl Nutrient {
    /// Every nutrient, in display order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];

    /// Field name on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }

    /// Display unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein | Self::Carbs | Self::Fat => "g",
        }
    }
}

/// Nutrition facts for one serving of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<NutrientAmount>,
    /// Protein in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<NutrientAmount>,
    /// Carbohydrates in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<NutrientAmount>,
    /// Fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<NutrientAmount>,
}

impl Nutrition {
    /// Build from plain numbers
    #[must_use]
    pub fn from_values(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories: Some(calories.into()),
            protein: Some(protein.into()),
            carbs: Some(carbs.into()),
            fat: Some(fat.into()),
        }
    }

    /// Raw field for a nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> Option<&NutrientAmount> {
        match nutrient {
            Nutrient::Calories => self.calories.as_ref(),
            Nutrient::Protein => self.protein.as_ref(),
            Nutrient::Carbs => self.carbs.as_ref(),
            Nutrient::Fat => self.fat.as_ref(),
        }
    }

    /// Numeric reading of a nutrient, zero when absent
    #[must_use]
    pub fn value(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient).map_or(0.0, NutrientAmount::value)
    }

    /// True when no field is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.calories.is_none() && self.protein.is_none() && self.carbs.is_none() && self.fat.is_none()
    }
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identifier assigned by the recipe service
    #[serde(rename = "_id")]
    pub id: RecipeId,
    /// Recipe name
    pub name: String,
    /// Intended meal, if one was chosen
    #[serde(default, deserialize_with = "deserialize_meal_type")]
    pub meal_type: Option<MealType>,
    /// Ingredients in entry order
    #[serde(default, deserialize_with = "deserialize_list")]
    pub ingredients: Vec<String>,
    /// Preparation steps in order
    #[serde(default, deserialize_with = "deserialize_steps")]
    pub instructions: Vec<String>,
    /// Tags in insertion order
    #[serde(default, deserialize_with = "deserialize_list")]
    pub tags: Vec<String>,
    /// Nutrition facts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    /// Attach a service-assigned identity to a submitted recipe
    #[must_use]
    pub fn from_new(id: RecipeId, recipe: NewRecipe) -> Self {
        Self {
            id,
            name: recipe.name,
            meal_type: recipe.meal_type,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            tags: recipe.tags,
            nutrition: recipe.nutrition,
        }
    }

    /// Numeric reading of a nutrient, zero when the recipe has no nutrition facts
    #[must_use]
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        self.nutrition.as_ref().map_or(0.0, |n| n.value(nutrient))
    }

    /// Replace every field present in `update`
    pub fn apply_update(&mut self, update: RecipeUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(meal_type) = update.meal_type {
            self.meal_type = Some(meal_type);
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = update.instructions {
            self.instructions = instructions;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(nutrition) = update.nutrition {
            self.nutrition = Some(nutrition);
        }
    }
}

/// A recipe submitted for creation (no identity yet)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    /// Recipe name
    pub name: String,
    /// Intended meal, if one was chosen
    #[serde(default, deserialize_with = "deserialize_meal_type")]
    pub meal_type: Option<MealType>,
    /// Ingredients in entry order
    #[serde(default, deserialize_with = "deserialize_list")]
    pub ingredients: Vec<String>,
    /// Preparation steps in order
    #[serde(default, deserialize_with = "deserialize_steps")]
    pub instructions: Vec<String>,
    /// Tags in insertion order
    #[serde(default, deserialize_with = "deserialize_list")]
    pub tags: Vec<String>,
    /// Nutrition facts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl NewRecipe {
    /// Check required-field presence
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the name is blank or there is no
    /// non-blank ingredient or instruction.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if !self.ingredients.iter().any(|i| !i.trim().is_empty()) {
            return Err(AppError::missing_field("ingredients"));
        }
        if !self.instructions.iter().any(|i| !i.trim().is_empty()) {
            return Err(AppError::missing_field("instructions"));
        }
        Ok(())
    }
}

/// Partial update: only present fields are replaced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeUpdate {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New meal type; blank or unknown values leave the stored one alone
    #[serde(
        default,
        deserialize_with = "deserialize_meal_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub meal_type: Option<MealType>,
    /// Replacement ingredient list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Replacement instruction list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    /// Replacement tag list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Replacement nutrition facts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl RecipeUpdate {
    /// True when the update would change nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.meal_type.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
            && self.tags.is_none()
            && self.nutrition.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nutrient_amount_reads_numbers_and_text() {
        assert!((NutrientAmount::Number(350.0).value() - 350.0).abs() < f64::EPSILON);
        assert!((NutrientAmount::Text(" 12.5 ".into()).value() - 12.5).abs() < f64::EPSILON);
        assert!(NutrientAmount::Text(String::new()).value().abs() < f64::EPSILON);
        assert!(NutrientAmount::Text("lots".into()).value().abs() < f64::EPSILON);
        assert!(NutrientAmount::Number(-4.0).value().abs() < f64::EPSILON);
        assert!(NutrientAmount::Number(f64::NAN).value().abs() < f64::EPSILON);
    }

    #[test]
    fn test_nutrient_amount_from_input() {
        assert_eq!(NutrientAmount::from_input("  "), None);
        assert_eq!(
            NutrientAmount::from_input("42"),
            Some(NutrientAmount::Number(42.0))
        );
        assert_eq!(
            NutrientAmount::from_input("about 5"),
            Some(NutrientAmount::Text("about 5".into()))
        );
    }

    #[test]
    fn test_recipe_accepts_legacy_shapes() {
        let recipe: Recipe = serde_json::from_value(json!({
            "_id": "65a1",
            "name": "Pancakes",
            "meal_type": "breakfast",
            "ingredients": ["flour", "milk"],
            "instructions": "Mix and fry.",
            "tags": ["vegetarian"],
            "nutrition": { "calories": "350", "protein": 12, "carbs": "", "fat": 10 }
        }))
        .unwrap();

        assert_eq!(recipe.id.as_str(), "65a1");
        assert_eq!(recipe.meal_type, Some(MealType::Breakfast));
        assert_eq!(recipe.instructions, vec!["Mix and fry.".to_owned()]);
        assert!((recipe.nutrient(Nutrient::Calories) - 350.0).abs() < f64::EPSILON);
        assert!(recipe.nutrient(Nutrient::Carbs).abs() < f64::EPSILON);
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let recipes: Vec<Recipe> = serde_json::from_value(json!([
            { "_id": "1", "name": "Chili", "ingredients": ["beans"], "tags": ["x"] },
            { "_id": "2", "name": "Toast", "ingredients": null, "tags": null }
        ]))
        .unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].tags, vec!["x"]);
        assert!(recipes[1].tags.is_empty());
        assert!(recipes[1].ingredients.is_empty());

        let draft: NewRecipe = serde_json::from_value(json!({
            "name": "Soup",
            "ingredients": null,
            "instructions": ["simmer"],
            "tags": null
        }))
        .unwrap();
        assert!(draft.tags.is_empty());
        assert_eq!(
            draft.validate().unwrap_err().context.details["field"],
            "ingredients"
        );
    }

    #[test]
    fn test_update_blank_meal_type_reads_as_none() {
        let update: RecipeUpdate = serde_json::from_value(json!({
            "name": "Porridge",
            "meal_type": ""
        }))
        .unwrap();
        assert_eq!(update.meal_type, None);
        assert_eq!(update.name.as_deref(), Some("Porridge"));

        let update: RecipeUpdate =
            serde_json::from_value(json!({ "meal_type": "Lunch" })).unwrap();
        assert_eq!(update.meal_type, Some(MealType::Lunch));
    }

    #[test]
    fn test_blank_meal_type_reads_as_none() {
        let recipe: Recipe = serde_json::from_value(json!({
            "_id": "1",
            "name": "Toast",
            "meal_type": ""
        }))
        .unwrap();

        assert_eq!(recipe.meal_type, None);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.nutrition.is_none());
    }

    #[test]
    fn test_recipe_serializes_id_as_underscore_id() {
        let recipe = Recipe::from_new(
            RecipeId::new("abc"),
            NewRecipe {
                name: "Soup".into(),
                ..NewRecipe::default()
            },
        );
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["_id"], "abc");
        assert!(value.get("nutrition").is_none());
    }

    #[test]
    fn test_new_recipe_validation() {
        let mut recipe = NewRecipe {
            name: "Oatmeal".into(),
            ingredients: vec!["oats".into()],
            instructions: vec!["boil".into()],
            ..NewRecipe::default()
        };
        assert!(recipe.validate().is_ok());

        recipe.instructions = vec!["  ".into()];
        let err = recipe.validate().unwrap_err();
        assert_eq!(err.context.details["field"], "instructions");

        recipe.name = " ".into();
        let err = recipe.validate().unwrap_err();
        assert_eq!(err.context.details["field"], "name");
    }

    #[test]
    fn test_apply_update_only_replaces_present_fields() {
        let mut recipe = Recipe::from_new(
            RecipeId::new("1"),
            NewRecipe {
                name: "Chili".into(),
                ingredients: vec!["beans".into()],
                tags: vec!["vegan".into()],
                ..NewRecipe::default()
            },
        );

        recipe.apply_update(RecipeUpdate {
            tags: Some(vec!["spicy".into()]),
            ..RecipeUpdate::default()
        });

        assert_eq!(recipe.name, "Chili");
        assert_eq!(recipe.ingredients, vec!["beans".to_owned()]);
        assert_eq!(recipe.tags, vec!["spicy".to_owned()]);
    }
}
