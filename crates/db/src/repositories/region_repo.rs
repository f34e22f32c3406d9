//! Repository for the `regions` table.

use sqlx::PgPool;
use tramper_core::types::DbId;

use crate::models::region::{CreateRegion, Region, UpdateRegion};

const REGION_COLUMNS: &str = "id, code, name, region_image_url";

/// Provides CRUD operations for regions.
pub struct RegionRepo;

impl RegionRepo {
    /// Insert a new region, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRegion) -> Result<Region, sqlx::Error> {
        let query = format!(
            "INSERT INTO regions (code, name, region_image_url) \
             VALUES ($1, $2, $3) \
             RETURNING {REGION_COLUMNS}"
        );
        sqlx::query_as::<_, Region>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.region_image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a region by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Region>, sqlx::Error> {
        let query = format!("SELECT {REGION_COLUMNS} FROM regions WHERE id = $1");
        sqlx::query_as::<_, Region>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all regions.
    pub async fn list(pool: &PgPool) -> Result<Vec<Region>, sqlx::Error> {
        let query = format!("SELECT {REGION_COLUMNS} FROM regions ORDER BY name ASC");
        sqlx::query_as::<_, Region>(&query).fetch_all(pool).await
    }

    /// Replace all mutable fields of a region. Returns `None` if no row
    /// matches the ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRegion,
    ) -> Result<Option<Region>, sqlx::Error> {
        let query = format!(
            "UPDATE regions SET code = $2, name = $3, region_image_url = $4 \
             WHERE id = $1 \
             RETURNING {REGION_COLUMNS}"
        );
        sqlx::query_as::<_, Region>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.region_image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a region by ID, returning the removed row so callers can
    /// echo it. Returns `None` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Region>, sqlx::Error> {
        let query = format!("DELETE FROM regions WHERE id = $1 RETURNING {REGION_COLUMNS}");
        sqlx::query_as::<_, Region>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
