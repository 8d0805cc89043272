// ABOUTME: Coordinates of the weekly schedule grid
// ABOUTME: Day, MealSlot and SlotKey with parsing for command-line and wire use
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::recipe::MealType;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the schedule week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Day {
    /// Every day in schedule order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Row index in the schedule grid
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a day name or its three-letter abbreviation, ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|day| {
            let name = day.as_str().to_lowercase();
            lower == name || (lower.len() == 3 && name.starts_with(&lower))
        })
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meal slot in a schedule day
///
/// The schedule has no snack row, so this is narrower than [`MealType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast column
    Breakfast,
    /// Lunch column
    Lunch,
    /// Dinner column
    Dinner,
}

impl MealSlot {
    /// Every slot in column order
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    /// Column index in the schedule grid
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a slot name, ignoring case
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            _ => None,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MealSlot> for MealType {
    fn from(slot: MealSlot) -> Self {
        match slot {
            MealSlot::Breakfast => Self::Breakfast,
            MealSlot::Lunch => Self::Lunch,
            MealSlot::Dinner => Self::Dinner,
        }
    }
}

/// One cell of the schedule grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    /// Row
    pub day: Day,
    /// Column
    pub slot: MealSlot,
}

impl SlotKey {
    /// Build a cell coordinate
    #[must_use]
    pub const fn new(day: Day, slot: MealSlot) -> Self {
        Self { day, slot }
    }

    /// All 21 cells, day by day
    pub fn all() -> impl Iterator<Item = Self> {
        Day::ALL
            .into_iter()
            .flat_map(|day| MealSlot::ALL.into_iter().map(move |slot| Self::new(day, slot)))
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.day, self.slot)
    }
}

impl FromStr for SlotKey {
    type Err = AppError;

    /// Parse `day:slot` or `day/slot`, e.g. `monday:breakfast`
    fn from_str(s: &str) -> AppResult<Self> {
        let (day, slot) = s
            .split_once([':', '/'])
            .ok_or_else(|| AppError::invalid_input(format!("expected DAY:SLOT, got '{s}'")))?;

        let day = Day::parse(day)
            .ok_or_else(|| AppError::invalid_input(format!("unknown day '{day}'")))?;
        let slot = MealSlot::parse(slot)
            .ok_or_else(|| AppError::invalid_input(format!("unknown meal slot '{slot}'")))?;

        Ok(Self::new(day, slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_key_parsing() {
        let key: SlotKey = "monday:breakfast".parse().unwrap();
        assert_eq!(key, SlotKey::new(Day::Monday, MealSlot::Breakfast));

        let key: SlotKey = "Tue/Lunch".parse().unwrap();
        assert_eq!(key, SlotKey::new(Day::Tuesday, MealSlot::Lunch));

        assert!("monday".parse::<SlotKey>().is_err());
        assert!("funday:lunch".parse::<SlotKey>().is_err());
        assert!("monday:snack".parse::<SlotKey>().is_err());
    }

    #[test]
    fn test_grid_has_21_distinct_cells() {
        let cells: Vec<SlotKey> = SlotKey::all().collect();
        assert_eq!(cells.len(), crate::constants::schedule::CELL_COUNT);
        assert_eq!(cells[0], SlotKey::new(Day::Monday, MealSlot::Breakfast));
        assert_eq!(cells[20], SlotKey::new(Day::Sunday, MealSlot::Dinner));
    }

    #[test]
    fn test_indices_follow_declaration_order() {
        assert_eq!(Day::Sunday.index(), 6);
        assert_eq!(MealSlot::Dinner.index(), 2);
    }
}
