//! Route definitions for the `/walks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::walk;
use crate::state::AppState;

/// Routes mounted at `/walks`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(walk::list).post(walk::create))
        .route(
            "/{id}",
            get(walk::get_by_id).put(walk::update).delete(walk::delete),
        )
}
