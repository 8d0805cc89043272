// ABOUTME: Recipe creation form state with dynamic ingredient, instruction and tag lists
// ABOUTME: Edits the in-progress draft, suggests tags and converts it into a validated NewRecipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use crate::models::{MealType, NewRecipe, Nutrient, NutrientAmount, Nutrition};

/// Raw text of the four nutrition inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NutritionInput {
    /// Calories text
    pub calories: String,
    /// Protein text
    pub protein: String,
    /// Carbs text
    pub carbs: String,
    /// Fat text
    pub fat: String,
}

impl NutritionInput {
    /// Text entered for a nutrient
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> &str {
        match nutrient {
            Nutrient::Calories => &self.calories,
            Nutrient::Protein => &self.protein,
            Nutrient::Carbs => &self.carbs,
            Nutrient::Fat => &self.fat,
        }
    }

    fn slot_mut(&mut self, nutrient: Nutrient) -> &mut String {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fat => &mut self.fat,
        }
    }

    /// Nutrition facts from the entered text; `None` when every field is blank
    #[must_use]
    pub fn to_nutrition(&self) -> Option<Nutrition> {
        let nutrition = Nutrition {
            calories: NutrientAmount::from_input(&self.calories),
            protein: NutrientAmount::from_input(&self.protein),
            carbs: NutrientAmount::from_input(&self.carbs),
            fat: NutrientAmount::from_input(&self.fat),
        };
        (!nutrition.is_empty()).then_some(nutrition)
    }
}

/// Which dynamic list an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    /// Ingredient rows
    Ingredients,
    /// Instruction rows
    Instructions,
}

impl ListField {
    const fn label(self) -> &'static str {
        match self {
            Self::Ingredients => "ingredient",
            Self::Instructions => "instruction",
        }
    }
}

/// Edits applied to the draft by the planner state container
#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    /// Replace the name text
    SetName(String),
    /// Choose (or clear) the meal type
    SetMealType(Option<MealType>),
    /// Replace the text of one list row
    SetRow {
        /// Target list
        field: ListField,
        /// Row position
        index: usize,
        /// New text
        text: String,
    },
    /// Append a blank row
    AddRow(ListField),
    /// Remove a row (the last remaining row is kept)
    RemoveRow(ListField, usize),
    /// Replace the text of a nutrition input
    SetNutrient(Nutrient, String),
    /// Replace the tag input text
    SetTagInput(String),
    /// Attach a tag
    AddTag(String),
    /// Detach the tag at a position
    RemoveTag(usize),
    /// Discard everything
    Reset,
}

/// The in-progress, not yet submitted recipe
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    /// Name text
    pub name: String,
    /// Chosen meal type
    pub meal_type: Option<MealType>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    tags: Vec<String>,
    /// Nutrition input text
    pub nutrition: NutritionInput,
    tag_input: String,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            meal_type: None,
            ingredients: vec![String::new()],
            instructions: vec![String::new()],
            tags: Vec::new(),
            nutrition: NutritionInput::default(),
            tag_input: String::new(),
        }
    }
}

impl RecipeDraft {
    /// Empty draft: one blank ingredient row and one blank instruction row
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingredient rows, blanks included
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Instruction rows, blanks included
    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Attached tags in insertion order
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Current tag input text
    #[must_use]
    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    /// Apply one edit
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when a row or tag index is out of range
    pub fn apply(&mut self, action: DraftAction) -> AppResult<()> {
        match action {
            DraftAction::SetName(name) => self.set_name(name),
            DraftAction::SetMealType(meal_type) => self.set_meal_type(meal_type),
            DraftAction::SetRow { field, index, text } => self.set_row(field, index, text)?,
            DraftAction::AddRow(field) => self.rows_mut(field).push(String::new()),
            DraftAction::RemoveRow(field, index) => self.remove_row(field, index)?,
            DraftAction::SetNutrient(nutrient, text) => self.set_nutrient(nutrient, text),
            DraftAction::SetTagInput(text) => self.set_tag_input(text),
            DraftAction::AddTag(tag) => {
                self.add_tag(&tag);
            }
            DraftAction::RemoveTag(index) => self.remove_tag(index)?,
            DraftAction::Reset => self.reset(),
        }
        Ok(())
    }

    /// Replace the name text
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Choose or clear the meal type
    pub fn set_meal_type(&mut self, meal_type: Option<MealType>) {
        self.meal_type = meal_type;
    }

    /// Replace the text of one nutrition input
    pub fn set_nutrient(&mut self, nutrient: Nutrient, text: impl Into<String>) {
        *self.nutrition.slot_mut(nutrient) = text.into();
    }

    /// Replace the tag input text
    pub fn set_tag_input(&mut self, text: impl Into<String>) {
        self.tag_input = text.into();
    }

    /// Replace the ingredient row at `index`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `index` is out of range
    pub fn set_ingredient(&mut self, index: usize, text: impl Into<String>) -> AppResult<()> {
        self.set_row(ListField::Ingredients, index, text.into())
    }

    /// Append a blank ingredient row
    pub fn add_ingredient(&mut self) {
        self.ingredients.push(String::new());
    }

    /// Remove the ingredient row at `index`; the last row is kept
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `index` is out of range
    pub fn remove_ingredient(&mut self, index: usize) -> AppResult<()> {
        self.remove_row(ListField::Ingredients, index)
    }

    /// Replace the instruction row at `index`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `index` is out of range
    pub fn set_instruction(&mut self, index: usize, text: impl Into<String>) -> AppResult<()> {
        self.set_row(ListField::Instructions, index, text.into())
    }

    /// Append a blank instruction row
    pub fn add_instruction(&mut self) {
        self.instructions.push(String::new());
    }

    /// Remove the instruction row at `index`; the last row is kept
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `index` is out of range
    pub fn remove_instruction(&mut self, index: usize) -> AppResult<()> {
        self.remove_row(ListField::Instructions, index)
    }

    fn rows_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Ingredients => &mut self.ingredients,
            ListField::Instructions => &mut self.instructions,
        }
    }

    fn set_row(&mut self, field: ListField, index: usize, text: String) -> AppResult<()> {
        let row = self.rows_mut(field).get_mut(index).ok_or_else(|| {
            AppError::invalid_input(format!("no {} row at position {index}", field.label()))
        })?;
        *row = text;
        Ok(())
    }

    fn remove_row(&mut self, field: ListField, index: usize) -> AppResult<()> {
        let rows = self.rows_mut(field);
        if index >= rows.len() {
            return Err(AppError::invalid_input(format!(
                "no {} row at position {index}",
                field.label()
            )));
        }
        if rows.len() > 1 {
            rows.remove(index);
        }
        Ok(())
    }

    /// Attach a tag
    ///
    /// The input is trimmed; blank input and tags already on the draft are
    /// rejected. The tag input is cleared either way. Returns whether the tag
    /// was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        self.tag_input.clear();

        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    /// Detach the tag at `index`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `index` is out of range
    pub fn remove_tag(&mut self, index: usize) -> AppResult<()> {
        if index >= self.tags.len() {
            return Err(AppError::invalid_input(format!(
                "no tag at position {index}"
            )));
        }
        self.tags.remove(index);
        Ok(())
    }

    /// Known tags containing the current input (ignoring case), minus attached ones
    ///
    /// Nothing is suggested while the input is empty.
    #[must_use]
    pub fn tag_suggestions<'a>(&self, known_tags: &'a [String]) -> Vec<&'a str> {
        if self.tag_input.is_empty() {
            return Vec::new();
        }
        let needle = self.tag_input.to_lowercase();

        known_tags
            .iter()
            .filter(|t| t.to_lowercase().contains(&needle) && !self.tags.contains(t))
            .map(String::as_str)
            .collect()
    }

    /// Validate the draft and produce the submission body
    ///
    /// Blank ingredient and instruction rows are dropped and blank nutrition
    /// inputs are omitted.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the name is blank or no ingredient
    /// or instruction row has text
    pub fn to_new_recipe(&self) -> AppResult<NewRecipe> {
        let keep = |rows: &[String]| -> Vec<String> {
            rows.iter()
                .filter(|r| !r.trim().is_empty())
                .cloned()
                .collect()
        };

        let recipe = NewRecipe {
            name: self.name.trim().to_owned(),
            meal_type: self.meal_type,
            ingredients: keep(&self.ingredients),
            instructions: keep(&self.instructions),
            tags: self.tags.clone(),
            nutrition: self.nutrition.to_nutrition(),
        };
        recipe.validate()?;
        Ok(recipe)
    }

    /// Back to the empty draft
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
