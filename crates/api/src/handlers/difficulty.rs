//! Handlers for the read-only `/difficulties` lookup.

use axum::extract::State;

use tramper_db::models::difficulty::Difficulty;
use tramper_db::repositories::DifficultyRepo;

use crate::error::AppResult;
use crate::extract::Json;
use crate::state::AppState;

/// GET /difficulties
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Difficulty>>> {
    let difficulties = DifficultyRepo::list(&state.pool).await?;
    Ok(Json(difficulties))
}
