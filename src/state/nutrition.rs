// ABOUTME: Nutrition aggregation over scheduled meals
// ABOUTME: Sums calories, protein, carbs and fat for a day or the whole week
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::schedule::Schedule;
use crate::models::{Day, Nutrient, Recipe};
use serde::Serialize;
use std::ops::{Add, AddAssign};

/// Summed nutrition facts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutritionTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl NutritionTotals {
    /// Add one recipe's nutrition; missing or unreadable fields count as zero
    pub fn add_recipe(&mut self, recipe: &Recipe) {
        self.calories += recipe.nutrient(Nutrient::Calories);
        self.protein += recipe.nutrient(Nutrient::Protein);
        self.carbs += recipe.nutrient(Nutrient::Carbs);
        self.fat += recipe.nutrient(Nutrient::Fat);
    }

    /// Totals over a set of cells, skipping empty ones
    pub fn from_meals<'a, I>(meals: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a Recipe>>,
    {
        meals
            .into_iter()
            .flatten()
            .fold(Self::default(), |mut totals, recipe| {
                totals.add_recipe(recipe);
                totals
            })
    }

    /// Total for one nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Nutrition of everything scheduled on `day`
#[must_use]
pub fn day_totals(schedule: &Schedule, day: Day) -> NutritionTotals {
    NutritionTotals::from_meals(schedule.day(day).map(|(_, recipe)| recipe))
}

/// Per-day totals for the whole week, Monday first
#[must_use]
pub fn week_totals(schedule: &Schedule) -> Vec<(Day, NutritionTotals)> {
    Day::ALL
        .into_iter()
        .map(|day| (day, day_totals(schedule, day)))
        .collect()
}
