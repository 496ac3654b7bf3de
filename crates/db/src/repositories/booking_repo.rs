//! Repository for the `bookings` table.
//!
//! Reads left-join the package title; a booking row survives its package
//! going missing, with `package_title` reading back as `None`. Ordering is
//! by creation time ascending. There is no uniqueness constraint on
//! `(email, package_id)` -- duplicate bookings are permitted by design.

use geleza_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{Booking, CreateBooking, UpdateBooking};

const COLUMNS: &str = "b.id, b.package_id, b.full_name, b.email, b.phone, \
    b.departure_date, b.return_date, b.travelers, b.room_type, b.status, \
    b.created_at, p.title AS package_title";

const FROM: &str = "FROM bookings b LEFT JOIN packages p ON p.id = b.package_id";

/// Provides CRUD and status operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking, returning the created row with its package
    /// title joined in.
    ///
    /// The id and `created_at` are assigned by the database; a
    /// client-supplied creation time is never honored. Status defaults to
    /// `pending` when unspecified. Input validation happens in the service
    /// layer before this call.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO bookings
                (package_id, full_name, email, phone, departure_date,
                 return_date, travelers, room_type, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 'pending'))
             RETURNING id",
        )
        .bind(input.package_id)
        .bind(&input.full_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.departure_date)
        .bind(&input.return_date)
        .bind(input.travelers)
        .bind(&input.room_type)
        .bind(&input.status)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a booking by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE b.id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all bookings, ordered by creation time ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} ORDER BY b.created_at");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }

    /// Update a booking. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. `created_at`
    /// is immutable.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let updated: Option<(DbId,)> = sqlx::query_as(
            "UPDATE bookings SET
                package_id = COALESCE($2, package_id),
                full_name = COALESCE($3, full_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                departure_date = COALESCE($6, departure_date),
                return_date = COALESCE($7, return_date),
                travelers = COALESCE($8, travelers),
                room_type = COALESCE($9, room_type),
                status = COALESCE($10, status)
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(input.package_id)
        .bind(&input.full_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.departure_date)
        .bind(&input.return_date)
        .bind(input.travelers)
        .bind(&input.room_type)
        .bind(&input.status)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some((id,)) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Set a booking's status. Returns `None` if no row with the given
    /// `id` exists. The status value must already be validated against the
    /// enum domain.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let updated: Option<(DbId,)> =
            sqlx::query_as("UPDATE bookings SET status = $2 WHERE id = $1 RETURNING id")
                .bind(id)
                .bind(status)
                .fetch_optional(pool)
                .await?;

        match updated {
            Some((id,)) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Delete a booking by ID. Returns `true` if a row was removed.
    ///
    /// Deleting an absent id is not an error at this level; callers treat
    /// the operation as idempotent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
