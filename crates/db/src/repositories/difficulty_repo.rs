//! Repository for the `difficulties` lookup table.

use sqlx::PgPool;
use tramper_core::types::DbId;

use crate::models::difficulty::Difficulty;

const DIFFICULTY_COLUMNS: &str = "id, name";

/// Read-only access to the seeded difficulty tiers.
pub struct DifficultyRepo;

impl DifficultyRepo {
    /// List all difficulty tiers.
    pub async fn list(pool: &PgPool) -> Result<Vec<Difficulty>, sqlx::Error> {
        let query = format!("SELECT {DIFFICULTY_COLUMNS} FROM difficulties ORDER BY name ASC");
        sqlx::query_as::<_, Difficulty>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a difficulty by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Difficulty>, sqlx::Error> {
        let query = format!("SELECT {DIFFICULTY_COLUMNS} FROM difficulties WHERE id = $1");
        sqlx::query_as::<_, Difficulty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
