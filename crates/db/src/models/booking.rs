//! Booking entity model and DTOs.

use geleza_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bookings` table, left-joined with its package title.
///
/// The left join means a booking still reads back even if its package row
/// is gone; `package_title` is simply absent in that case.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub package_id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub departure_date: String,
    pub return_date: String,
    pub travelers: i32,
    pub room_type: String,
    pub status: String,
    pub created_at: Timestamp,
    pub package_title: Option<String>,
}

/// DTO for creating a new booking.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub package_id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub departure_date: String,
    pub return_date: String,
    pub travelers: i32,
    pub room_type: String,
    /// Defaults to `pending` if omitted.
    pub status: Option<String>,
}

/// DTO for updating an existing booking. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBooking {
    pub package_id: Option<DbId>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub travelers: Option<i32>,
    pub room_type: Option<String>,
    pub status: Option<String>,
}
