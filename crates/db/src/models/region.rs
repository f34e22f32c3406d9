//! Region entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tramper_core::types::DbId;

/// A region row from the `regions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub region_image_url: Option<String>,
}

/// DTO for creating a new region.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegion {
    pub code: String,
    pub name: String,
    pub region_image_url: Option<String>,
}

/// DTO for updating an existing region. PUT is a full replace, so the
/// same fields are required as on create.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegion {
    pub code: String,
    pub name: String,
    pub region_image_url: Option<String>,
}
