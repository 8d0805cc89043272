// ABOUTME: Weekly plan command for meal-planner-cli
// ABOUTME: Replays cell assignments and moves as drop events and prints per-day nutrition totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use meal_planner::{
    client::HttpRecipeClient,
    errors::{AppError, AppResult},
    models::{RecipeId, SlotKey},
    planner::Planner,
    state::{Action, DragEvent, View},
};
use tracing::debug;

use crate::helpers::display::{display_week, week_json};

type Result<T> = AppResult<T>;

/// Build the plan from `--assign` and `--move` flags and print it
pub async fn run(
    client: HttpRecipeClient,
    assignments: &[String],
    moves: &[String],
    json: bool,
) -> Result<()> {
    let mut planner = Planner::new(client);
    planner.load().await?;
    planner.dispatch(Action::ShowView(View::Schedule))?;

    for assignment in assignments {
        let (cell, id) = parse_assignment(assignment)?;
        debug!(cell = %cell, recipe_id = %id, "Assigning recipe");
        planner.dispatch(Action::Drop(DragEvent::assign(id, cell)))?;
    }

    for movement in moves {
        let (from, to) = parse_move(movement)?;
        let id = planner
            .state()
            .schedule()
            .get(from)
            .map(|recipe| recipe.id.clone())
            .ok_or_else(|| AppError::invalid_input(format!("No recipe planned for {from}")))?;
        debug!(from = %from, to = %to, recipe_id = %id, "Moving recipe");
        planner.dispatch(Action::Drop(DragEvent::move_between(id, from, to)))?;
    }

    let schedule = planner.state().schedule();
    if json {
        let value = week_json(schedule);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        display_week(schedule);
    }
    Ok(())
}

/// `day:slot=RECIPE_ID`
fn parse_assignment(text: &str) -> Result<(SlotKey, RecipeId)> {
    let (cell, id) = text
        .split_once('=')
        .ok_or_else(|| AppError::invalid_input(format!("expected DAY:SLOT=ID, got '{text}'")))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::invalid_input(format!("missing recipe id in '{text}'")));
    }
    Ok((cell.trim().parse()?, RecipeId::from(id)))
}

/// `day:slot=day:slot`
fn parse_move(text: &str) -> Result<(SlotKey, SlotKey)> {
    let (from, to) = text.split_once('=').ok_or_else(|| {
        AppError::invalid_input(format!("expected DAY:SLOT=DAY:SLOT, got '{text}'"))
    })?;
    Ok((from.trim().parse()?, to.trim().parse()?))
}
