use axum::{extract::State, response::Html};

use crate::{error::AppResult, render, state::AppState};

/// Handler for the recommendations page.
///
/// One upstream fetch per page load, then a full render. Failures bail out
/// through `AppError`, which draws the inline message in place of the grid.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let records = state.jikan.fetch_recommendations().await?;
    Ok(Html(render::page(&render::grid(&records))))
}
