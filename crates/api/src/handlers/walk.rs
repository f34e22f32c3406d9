//! Handlers for the `/walks` resource.
//!
//! Walk responses embed the resolved difficulty and region on every
//! operation, reads and writes alike. Foreign-key existence is not
//! pre-checked here; a dangling reference surfaces from the database as a
//! persistence failure.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use tramper_core::error::CoreError;
use tramper_core::regions::validate_image_url;
use tramper_core::types::DbId;
use tramper_core::walks::{validate_length_in_km, validate_walk_description, validate_walk_name};
use tramper_db::models::walk::{CreateWalk, UpdateWalk, WalkDetail};
use tramper_db::repositories::WalkRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

fn validate_walk_payload(
    name: &str,
    description: &str,
    length_in_km: f64,
    image_url: Option<&str>,
) -> Result<(), AppError> {
    validate_walk_name(name).map_err(AppError::BadRequest)?;
    validate_walk_description(description).map_err(AppError::BadRequest)?;
    validate_length_in_km(length_in_km).map_err(AppError::BadRequest)?;
    validate_image_url(image_url).map_err(AppError::BadRequest)?;
    Ok(())
}

/// POST /walks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWalk>,
) -> AppResult<impl IntoResponse> {
    validate_walk_payload(
        &input.name,
        &input.description,
        input.length_in_km,
        input.walk_image_url.as_deref(),
    )?;

    let detail = WalkRepo::create(&state.pool, &input).await?;

    tracing::info!(
        walk_id = %detail.walk.id,
        region_id = %detail.walk.region_id,
        difficulty_id = %detail.walk.difficulty_id,
        "Walk created"
    );

    let location = [(header::LOCATION, format!("/walks/{}", detail.walk.id))];
    Ok((StatusCode::CREATED, location, Json(detail)))
}

/// GET /walks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WalkDetail>>> {
    let walks = WalkRepo::list(&state.pool).await?;
    Ok(Json(walks))
}

/// GET /walks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WalkDetail>> {
    let detail = WalkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Walk", id }))?;
    Ok(Json(detail))
}

/// PUT /walks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWalk>,
) -> AppResult<Json<WalkDetail>> {
    validate_walk_payload(
        &input.name,
        &input.description,
        input.length_in_km,
        input.walk_image_url.as_deref(),
    )?;

    let detail = WalkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Walk", id }))?;

    tracing::info!(walk_id = %id, "Walk updated");

    Ok(Json(detail))
}

/// DELETE /walks/{id}
///
/// Returns the removed representation, not an empty 204.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WalkDetail>> {
    let detail = WalkRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Walk", id }))?;

    tracing::info!(walk_id = %id, "Walk deleted");

    Ok(Json(detail))
}
