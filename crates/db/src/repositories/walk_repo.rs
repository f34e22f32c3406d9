//! Repository for the `walks` table.
//!
//! Every read resolves the difficulty and region relations, so all
//! methods return [`WalkDetail`] rather than the bare row. Writes accept
//! foreign-key identifiers only; referential integrity is the database's.

use sqlx::PgPool;
use tramper_core::types::DbId;

use crate::models::difficulty::Difficulty;
use crate::models::region::Region;
use crate::models::walk::{CreateWalk, UpdateWalk, Walk, WalkDetail};

const WALK_COLUMNS: &str =
    "id, name, description, length_in_km, walk_image_url, difficulty_id, region_id";

const DETAIL_COLUMNS: &str = "w.id, w.name, w.description, w.length_in_km, w.walk_image_url, \
     w.difficulty_id, w.region_id, \
     d.name AS difficulty_name, \
     r.code AS region_code, r.name AS region_name, r.region_image_url";

const DETAIL_JOINS: &str = "FROM walks w \
     JOIN difficulties d ON d.id = w.difficulty_id \
     JOIN regions r ON r.id = w.region_id";

/// Flat row shape produced by the detail JOIN; mapped into [`WalkDetail`].
#[derive(Debug, sqlx::FromRow)]
struct WalkDetailRow {
    id: DbId,
    name: String,
    description: String,
    length_in_km: f64,
    walk_image_url: Option<String>,
    difficulty_id: DbId,
    region_id: DbId,
    difficulty_name: String,
    region_code: String,
    region_name: String,
    region_image_url: Option<String>,
}

impl From<WalkDetailRow> for WalkDetail {
    fn from(row: WalkDetailRow) -> Self {
        WalkDetail {
            difficulty: Difficulty {
                id: row.difficulty_id,
                name: row.difficulty_name,
            },
            region: Region {
                id: row.region_id,
                code: row.region_code,
                name: row.region_name,
                region_image_url: row.region_image_url,
            },
            walk: Walk {
                id: row.id,
                name: row.name,
                description: row.description,
                length_in_km: row.length_in_km,
                walk_image_url: row.walk_image_url,
                difficulty_id: row.difficulty_id,
                region_id: row.region_id,
            },
        }
    }
}

/// Provides CRUD operations for walks, with relations resolved.
pub struct WalkRepo;

impl WalkRepo {
    /// Insert a new walk, returning the created row with its relations
    /// resolved. A dangling foreign key surfaces as a database error.
    pub async fn create(pool: &PgPool, input: &CreateWalk) -> Result<WalkDetail, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO walks \
                (name, description, length_in_km, walk_image_url, difficulty_id, region_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.length_in_km)
        .bind(&input.walk_image_url)
        .bind(input.difficulty_id)
        .bind(input.region_id)
        .fetch_one(pool)
        .await?;

        Self::fetch_detail(pool, id).await
    }

    /// Find a walk by ID with its relations resolved.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WalkDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} WHERE w.id = $1");
        let row = sqlx::query_as::<_, WalkDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(WalkDetail::from))
    }

    /// List all walks with their relations resolved.
    pub async fn list(pool: &PgPool) -> Result<Vec<WalkDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} ORDER BY w.name ASC");
        let rows = sqlx::query_as::<_, WalkDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(WalkDetail::from).collect())
    }

    /// Replace all mutable fields and both references of a walk.
    /// Returns `None` if no row matches the ID; nothing is written.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWalk,
    ) -> Result<Option<WalkDetail>, sqlx::Error> {
        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE walks SET \
                name = $2, description = $3, length_in_km = $4, \
                walk_image_url = $5, difficulty_id = $6, region_id = $7 \
             WHERE id = $1 \
             RETURNING id",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.length_in_km)
        .bind(&input.walk_image_url)
        .bind(input.difficulty_id)
        .bind(input.region_id)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(id) => Ok(Some(Self::fetch_detail(pool, id).await?)),
            None => Ok(None),
        }
    }

    /// Delete a walk by ID, returning the removed row with its relations
    /// resolved so callers can echo it. Returns `None` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<WalkDetail>, sqlx::Error> {
        let query = format!("DELETE FROM walks WHERE id = $1 RETURNING {WALK_COLUMNS}");
        let walk = match sqlx::query_as::<_, Walk>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        {
            Some(walk) => walk,
            None => return Ok(None),
        };

        // The lookup rows outlive the walk; resolve them for the echo.
        let difficulty = sqlx::query_as::<_, Difficulty>(
            "SELECT id, name FROM difficulties WHERE id = $1",
        )
        .bind(walk.difficulty_id)
        .fetch_one(pool)
        .await?;

        let region = sqlx::query_as::<_, Region>(
            "SELECT id, code, name, region_image_url FROM regions WHERE id = $1",
        )
        .bind(walk.region_id)
        .fetch_one(pool)
        .await?;

        Ok(Some(WalkDetail {
            walk,
            difficulty,
            region,
        }))
    }

    /// Fetch the resolved detail row for a walk known to exist (used
    /// after create/update, where the write just returned the ID).
    async fn fetch_detail(pool: &PgPool, id: DbId) -> Result<WalkDetail, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} WHERE w.id = $1");
        let row = sqlx::query_as::<_, WalkDetailRow>(&query)
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }
}
