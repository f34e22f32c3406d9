//! Route definitions for the read-only `/difficulties` lookup.

use axum::routing::get;
use axum::Router;

use crate::handlers::difficulty;
use crate::state::AppState;

/// Routes mounted at `/difficulties`.
///
/// ```text
/// GET    /        -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(difficulty::list))
}
