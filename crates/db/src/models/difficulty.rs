//! Difficulty lookup model.
//!
//! Difficulties are seeded by migration and never mutated through the
//! service's write surface, so there are no create/update DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tramper_core::types::DbId;

/// A row from the `difficulties` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Difficulty {
    pub id: DbId,
    pub name: String,
}
