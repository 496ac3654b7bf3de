//! Repository for the `package_itinerary` table.

use geleza_core::types::DbId;
use sqlx::PgPool;

use crate::models::package::{CreateItineraryDay, ItineraryDay, UpdateItineraryDay};

const COLUMNS: &str = "id, package_id, day_number, title, description";

/// Provides CRUD operations for package itinerary days.
pub struct ItineraryRepo;

impl ItineraryRepo {
    /// Insert a new itinerary day, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateItineraryDay,
    ) -> Result<ItineraryDay, sqlx::Error> {
        let query = format!(
            "INSERT INTO package_itinerary (package_id, day_number, title, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItineraryDay>(&query)
            .bind(input.package_id)
            .bind(input.day_number)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an itinerary day by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ItineraryDay>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM package_itinerary WHERE id = $1");
        sqlx::query_as::<_, ItineraryDay>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a package's itinerary, ordered by day number.
    pub async fn list_by_package(
        pool: &PgPool,
        package_id: DbId,
    ) -> Result<Vec<ItineraryDay>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM package_itinerary
             WHERE package_id = $1
             ORDER BY day_number"
        );
        sqlx::query_as::<_, ItineraryDay>(&query)
            .bind(package_id)
            .fetch_all(pool)
            .await
    }

    /// Update an itinerary day. Only non-`None` fields in `input` are
    /// applied. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItineraryDay,
    ) -> Result<Option<ItineraryDay>, sqlx::Error> {
        let query = format!(
            "UPDATE package_itinerary SET
                day_number = COALESCE($2, day_number),
                title = COALESCE($3, title),
                description = COALESCE($4, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItineraryDay>(&query)
            .bind(id)
            .bind(input.day_number)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an itinerary day by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM package_itinerary WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
