// ABOUTME: Tag suggestion command for meal-planner-cli
// ABOUTME: Matches typed text against tags already used by stored recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use meal_planner::{
    client::HttpRecipeClient,
    errors::AppResult,
    planner::Planner,
    state::{Action, DraftAction},
};

type Result<T> = AppResult<T>;

/// Print known tags containing `input`, or every known tag when it is empty
pub async fn suggest(client: HttpRecipeClient, input: String) -> Result<()> {
    let mut planner = Planner::new(client);
    planner.load().await?;

    if input.is_empty() {
        let tags = planner.state().tags();
        if tags.is_empty() {
            println!("No tags in use");
        }
        for tag in tags {
            println!("{tag}");
        }
        return Ok(());
    }

    planner.dispatch(Action::OpenCreateForm)?;
    planner.dispatch(Action::Draft(DraftAction::SetTagInput(input.clone())))?;

    let suggestions = planner.state().tag_suggestions();
    if suggestions.is_empty() {
        println!("No tags match '{input}'");
    }
    for tag in suggestions {
        println!("{tag}");
    }
    Ok(())
}
