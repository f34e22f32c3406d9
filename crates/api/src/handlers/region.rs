//! Handlers for the `/regions` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use tramper_core::error::CoreError;
use tramper_core::regions::{validate_image_url, validate_region_code, validate_region_name};
use tramper_core::types::DbId;
use tramper_db::models::region::{CreateRegion, Region, UpdateRegion};
use tramper_db::repositories::RegionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

fn validate_region_payload(
    code: &str,
    name: &str,
    image_url: Option<&str>,
) -> Result<(), AppError> {
    validate_region_code(code).map_err(AppError::BadRequest)?;
    validate_region_name(name).map_err(AppError::BadRequest)?;
    validate_image_url(image_url).map_err(AppError::BadRequest)?;
    Ok(())
}

/// POST /regions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRegion>,
) -> AppResult<impl IntoResponse> {
    validate_region_payload(&input.code, &input.name, input.region_image_url.as_deref())?;

    let region = RegionRepo::create(&state.pool, &input).await?;

    tracing::info!(region_id = %region.id, code = %region.code, "Region created");

    let location = [(header::LOCATION, format!("/regions/{}", region.id))];
    Ok((StatusCode::CREATED, location, Json(region)))
}

/// GET /regions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Region>>> {
    let regions = RegionRepo::list(&state.pool).await?;
    Ok(Json(regions))
}

/// GET /regions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Region>> {
    let region = RegionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Region",
            id,
        }))?;
    Ok(Json(region))
}

/// PUT /regions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRegion>,
) -> AppResult<Json<Region>> {
    validate_region_payload(&input.code, &input.name, input.region_image_url.as_deref())?;

    let region = RegionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Region",
            id,
        }))?;

    tracing::info!(region_id = %id, "Region updated");

    Ok(Json(region))
}

/// DELETE /regions/{id}
///
/// Returns the removed representation, not an empty 204.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Region>> {
    let region = RegionRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Region",
            id,
        }))?;

    tracing::info!(region_id = %id, "Region deleted");

    Ok(Json(region))
}
