//! Walk entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tramper_core::types::DbId;

use super::difficulty::Difficulty;
use super::region::Region;

/// A walk row from the `walks` table. Relations are carried as foreign
/// keys only; use [`WalkDetail`] for responses that embed them.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Walk {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub difficulty_id: DbId,
    pub region_id: DbId,
}

/// A walk enriched with its resolved difficulty and region.
///
/// Every walk response embeds both relations, on reads and writes alike.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDetail {
    #[serde(flatten)]
    pub walk: Walk,
    pub difficulty: Difficulty,
    pub region: Region,
}

/// DTO for creating a new walk. Relations are accepted as foreign-key
/// identifiers; their existence is enforced by the database.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalk {
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub difficulty_id: DbId,
    pub region_id: DbId,
}

/// DTO for updating an existing walk. PUT is a full replace of all
/// scalar fields and both references.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalk {
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub difficulty_id: DbId,
    pub region_id: DbId,
}
