//! Repository for the `destinations` table.
//!
//! Reads are left-joined with `categories` so listings carry the category
//! name and slug without a second round trip.

use geleza_core::types::DbId;
use sqlx::PgPool;

use crate::models::destination::{CreateDestination, Destination, UpdateDestination};

/// Joined column list shared across read queries. NUMERIC columns are cast
/// to text to stay decimal-safe.
const COLUMNS: &str = "d.id, d.slug, d.name, d.country, d.region, d.image, d.description, \
    d.package_count, d.starting_price::text AS starting_price, d.category_id, \
    d.rating::text AS rating, d.review_count, d.best_time, \
    c.name AS category, c.slug AS category_slug";

const FROM: &str = "FROM destinations d LEFT JOIN categories c ON c.id = d.category_id";

/// Provides CRUD operations for destinations.
pub struct DestinationRepo;

impl DestinationRepo {
    /// Insert a new destination, returning the created row with its
    /// category joined in.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDestination,
    ) -> Result<Destination, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO destinations
                (slug, name, country, region, image, description,
                 starting_price, category_id, rating, best_time)
             VALUES ($1, $2, $3, $4, $5, $6, $7::numeric, $8, $9::numeric, $10)
             RETURNING id",
        )
        .bind(&input.slug)
        .bind(&input.name)
        .bind(&input.country)
        .bind(&input.region)
        .bind(&input.image)
        .bind(&input.description)
        .bind(&input.starting_price)
        .bind(input.category_id)
        .bind(&input.rating)
        .bind(&input.best_time)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a destination by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Destination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE d.id = $1");
        sqlx::query_as::<_, Destination>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all destinations with their category joined in.
    pub async fn list(pool: &PgPool) -> Result<Vec<Destination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} ORDER BY d.name");
        sqlx::query_as::<_, Destination>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a destination. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDestination,
    ) -> Result<Option<Destination>, sqlx::Error> {
        let updated: Option<(DbId,)> = sqlx::query_as(
            "UPDATE destinations SET
                slug = COALESCE($2, slug),
                name = COALESCE($3, name),
                country = COALESCE($4, country),
                region = COALESCE($5, region),
                image = COALESCE($6, image),
                description = COALESCE($7, description),
                starting_price = COALESCE($8::numeric, starting_price),
                category_id = COALESCE($9, category_id),
                rating = COALESCE($10::numeric, rating),
                best_time = COALESCE($11, best_time)
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.slug)
        .bind(&input.name)
        .bind(&input.country)
        .bind(&input.region)
        .bind(&input.image)
        .bind(&input.description)
        .bind(&input.starting_price)
        .bind(input.category_id)
        .bind(&input.rating)
        .bind(&input.best_time)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some((id,)) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Delete a destination by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM destinations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
