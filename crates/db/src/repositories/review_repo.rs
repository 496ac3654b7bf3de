//! Repository for the `reviews` table.
//!
//! Reads are left-joined with `packages` so listings carry the package
//! title.

use geleza_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review, UpdateReview};

const COLUMNS: &str = "r.id, r.package_id, r.user_name, r.user_avatar, r.rating, \
    r.title, r.comment, r.date, r.verified, p.title AS package_title";

const FROM: &str = "FROM reviews r LEFT JOIN packages p ON p.id = r.package_id";

/// Provides CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created row with its package
    /// title joined in. The review date is assigned by the database.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO reviews
                (package_id, user_name, user_avatar, rating, title, comment, verified)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, false))
             RETURNING id",
        )
        .bind(input.package_id)
        .bind(&input.user_name)
        .bind(&input.user_avatar)
        .bind(input.rating)
        .bind(&input.title)
        .bind(&input.comment)
        .bind(input.verified)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a review by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE r.id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reviews with package titles, ordered by review date.
    pub async fn list(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} ORDER BY r.date");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    /// List all reviews for a package, ordered by review date.
    pub async fn list_by_package(
        pool: &PgPool,
        package_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE r.package_id = $1 ORDER BY r.date");
        sqlx::query_as::<_, Review>(&query)
            .bind(package_id)
            .fetch_all(pool)
            .await
    }

    /// Update a review. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let updated: Option<(DbId,)> = sqlx::query_as(
            "UPDATE reviews SET
                user_name = COALESCE($2, user_name),
                user_avatar = COALESCE($3, user_avatar),
                rating = COALESCE($4, rating),
                title = COALESCE($5, title),
                comment = COALESCE($6, comment),
                verified = COALESCE($7, verified)
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.user_name)
        .bind(&input.user_avatar)
        .bind(input.rating)
        .bind(&input.title)
        .bind(&input.comment)
        .bind(input.verified)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some((id,)) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Delete a review by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
