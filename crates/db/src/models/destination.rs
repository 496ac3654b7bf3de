//! Destination entity model and DTOs.
//!
//! `package_count` and `review_count` are denormalized counters carried as
//! stored columns; they are not transactionally maintained on child writes.

use geleza_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `destinations` table, left-joined with its category.
///
/// `category` / `category_slug` are `None` only in the degenerate case of a
/// dangling foreign key; the schema cascades category deletes, so reads
/// still tolerate the absence rather than failing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Destination {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub package_count: i32,
    pub starting_price: Option<String>,
    pub category_id: DbId,
    pub rating: Option<String>,
    pub review_count: i32,
    pub best_time: Option<String>,
    pub category: Option<String>,
    pub category_slug: Option<String>,
}

/// DTO for creating a new destination.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDestination {
    pub slug: String,
    pub name: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub starting_price: Option<String>,
    pub category_id: DbId,
    pub rating: Option<String>,
    pub best_time: Option<String>,
}

/// DTO for updating an existing destination. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDestination {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub starting_price: Option<String>,
    pub category_id: Option<DbId>,
    pub rating: Option<String>,
    pub best_time: Option<String>,
}
