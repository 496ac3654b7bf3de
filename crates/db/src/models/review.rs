//! Review entity model and DTOs.

use geleza_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table, left-joined with its package title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub package_id: DbId,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub rating: i32,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub date: Option<chrono::NaiveDate>,
    pub verified: Option<bool>,
    pub package_title: Option<String>,
}

/// DTO for creating a new review.
///
/// `package_id` may be omitted in request bodies; handlers overwrite it
/// with the id from the URL path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    #[serde(default)]
    pub package_id: DbId,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub rating: i32,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub verified: Option<bool>,
}

/// DTO for updating an existing review. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReview {
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub verified: Option<bool>,
}
