//! Package entity model and DTOs.

use geleza_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::package_item::PackageItem;
use crate::models::review::Review;

/// A row from the `packages` table, left-joined with its destination and
/// category names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Package {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub destination_id: DbId,
    pub category_id: DbId,
    pub duration: Option<String>,
    pub price: String,
    pub original_price: Option<String>,
    pub rating: Option<String>,
    pub review_count: Option<i32>,
    pub image: Option<String>,
    pub featured: Option<bool>,
    pub description: Option<String>,
    pub destination: Option<String>,
    pub destination_slug: Option<String>,
    pub category: Option<String>,
    pub category_slug: Option<String>,
}

/// An itinerary day for a package.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItineraryDay {
    pub id: DbId,
    pub package_id: DbId,
    pub day_number: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Full package detail: the package row plus all owned child collections.
///
/// Returned by the by-slug lookup that powers the public package page.
#[derive(Debug, Serialize)]
pub struct PackageDetail {
    #[serde(flatten)]
    pub package: Package,
    pub gallery: Vec<PackageItem>,
    pub inclusions: Vec<PackageItem>,
    pub exclusions: Vec<PackageItem>,
    pub highlights: Vec<PackageItem>,
    pub itinerary: Vec<ItineraryDay>,
    pub reviews: Vec<Review>,
}

/// DTO for creating a new package.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePackage {
    pub slug: String,
    pub title: String,
    pub destination_id: DbId,
    pub category_id: DbId,
    pub duration: Option<String>,
    /// Decimal string, e.g. `"1499.00"`.
    pub price: String,
    pub original_price: Option<String>,
    pub rating: Option<String>,
    pub review_count: Option<i32>,
    pub image: Option<String>,
    pub featured: Option<bool>,
    pub description: Option<String>,
}

/// DTO for updating an existing package. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePackage {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub destination_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub duration: Option<String>,
    pub price: Option<String>,
    pub original_price: Option<String>,
    pub rating: Option<String>,
    pub review_count: Option<i32>,
    pub image: Option<String>,
    pub featured: Option<bool>,
    pub description: Option<String>,
}

/// DTO for creating an itinerary day.
///
/// `package_id` may be omitted in request bodies; handlers overwrite it
/// with the id from the URL path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItineraryDay {
    #[serde(default)]
    pub package_id: DbId,
    pub day_number: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating an itinerary day. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItineraryDay {
    pub day_number: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
}
