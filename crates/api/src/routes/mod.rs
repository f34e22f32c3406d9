pub mod difficulty;
pub mod health;
pub mod region;
pub mod walk;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /regions                 list, create
/// /regions/{id}            get, update, delete
///
/// /walks                   list, create
/// /walks/{id}              get, update, delete
///
/// /difficulties            list (read-only lookup)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/regions", region::router())
        .nest("/walks", walk::router())
        .nest("/difficulties", difficulty::router())
}
