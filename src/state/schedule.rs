// ABOUTME: Weekly 7x3 schedule grid and the drag-and-drop reducer that edits it
// ABOUTME: Interprets drag source/destination pairs into assignments and moves between cells
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schedule grid and drag-and-drop reducer
//!
//! The grid always has one cell per (day, meal slot) pair. A cell stores a
//! snapshot of the recipe taken when it was assigned; later store changes do
//! not reach into the grid.

use super::recipes::RecipeStore;
use crate::constants::schedule::{DAYS_PER_WEEK, SLOTS_PER_DAY};
use crate::errors::{AppError, AppResult};
use crate::models::{Day, MealSlot, Recipe, RecipeId, SlotKey};
use tracing::debug;

/// Where a drag started or ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropLocation {
    /// The recipe list panel
    RecipeList,
    /// One schedule cell
    Cell(SlotKey),
}

/// A finished drag gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEvent {
    /// Recipe being dragged
    pub draggable: RecipeId,
    /// Where the drag started
    pub source: DropLocation,
    /// Where it was released; `None` when dropped outside any target
    pub destination: Option<DropLocation>,
}

impl DragEvent {
    /// Drag a recipe from the list onto a cell
    #[must_use]
    pub const fn assign(draggable: RecipeId, to: SlotKey) -> Self {
        Self {
            draggable,
            source: DropLocation::RecipeList,
            destination: Some(DropLocation::Cell(to)),
        }
    }

    /// Drag a scheduled recipe from one cell to another
    #[must_use]
    pub const fn move_between(draggable: RecipeId, from: SlotKey, to: SlotKey) -> Self {
        Self {
            draggable,
            source: DropLocation::Cell(from),
            destination: Some(DropLocation::Cell(to)),
        }
    }
}

/// The weekly meal grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    cells: [[Option<Recipe>; SLOTS_PER_DAY]; DAYS_PER_WEEK],
}

impl Schedule {
    /// Empty grid
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupant of a cell
    #[must_use]
    pub fn get(&self, key: SlotKey) -> Option<&Recipe> {
        self.cells[key.day.index()][key.slot.index()].as_ref()
    }

    /// Put a recipe in a cell, replacing any occupant
    pub fn assign(&mut self, key: SlotKey, recipe: Recipe) {
        self.cells[key.day.index()][key.slot.index()] = Some(recipe);
    }

    /// Empty a cell, returning what was there
    pub fn clear(&mut self, key: SlotKey) -> Option<Recipe> {
        self.cells[key.day.index()][key.slot.index()].take()
    }

    /// The three cells of one day in slot order
    pub fn day(&self, day: Day) -> impl Iterator<Item = (MealSlot, Option<&Recipe>)> + '_ {
        MealSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(SlotKey::new(day, slot))))
    }

    /// Number of occupied cells
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Compute the grid that results from a drag gesture
    ///
    /// Dropping outside any target, moving a cell onto itself, moving an
    /// empty cell and any source/destination pair other than list-to-cell or
    /// cell-to-cell all leave the grid unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when a list drag names a recipe the store no
    /// longer holds; the grid is left unchanged
    pub fn apply_drop(&self, store: &RecipeStore, event: &DragEvent) -> AppResult<Self> {
        let Some(destination) = event.destination else {
            debug!(recipe_id = %event.draggable, "Drop cancelled");
            return Ok(self.clone());
        };

        let mut next = self.clone();
        match (event.source, destination) {
            (DropLocation::RecipeList, DropLocation::Cell(to)) => {
                let recipe = store.get(&event.draggable).ok_or_else(|| {
                    AppError::not_found(format!("Recipe {}", event.draggable))
                        .with_resource_id(event.draggable.as_str())
                })?;
                debug!(recipe_id = %recipe.id, cell = %to, "Assigning recipe to cell");
                next.assign(to, recipe.clone());
            }
            (DropLocation::Cell(from), DropLocation::Cell(to)) if from != to => {
                if let Some(recipe) = next.clear(from) {
                    debug!(recipe_id = %recipe.id, from = %from, to = %to, "Moving recipe");
                    next.assign(to, recipe);
                }
            }
            (source, destination) => {
                debug!(?source, ?destination, "Ignoring drop");
            }
        }
        Ok(next)
    }
}
