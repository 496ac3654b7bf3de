//! Generic model for the four single-value package child tables
//! (gallery images, inclusions, exclusions, highlights).
//!
//! Each of these tables is `(id, package_id, <one text column>)`; a single
//! model and repository covers all four, parameterized by
//! [`PackageItemKind`].

use geleza_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Which package child table a generic item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageItemKind {
    Gallery,
    Inclusion,
    Exclusion,
    Highlight,
}

impl PackageItemKind {
    /// The backing table name.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Gallery => "package_gallery",
            Self::Inclusion => "package_inclusions",
            Self::Exclusion => "package_exclusions",
            Self::Highlight => "package_highlights",
        }
    }

    /// The table's single value column.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Gallery => "image_url",
            Self::Inclusion => "inclusion",
            Self::Exclusion => "exclusion",
            Self::Highlight => "highlight",
        }
    }

    /// Entity name used in NotFound errors.
    pub fn entity(&self) -> &'static str {
        match self {
            Self::Gallery => "GalleryImage",
            Self::Inclusion => "Inclusion",
            Self::Exclusion => "Exclusion",
            Self::Highlight => "Highlight",
        }
    }
}

/// A row from one of the package child tables; the text column is aliased
/// to `value` regardless of kind.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PackageItem {
    pub id: DbId,
    pub package_id: DbId,
    pub value: String,
}

/// DTO for creating a package child item.
///
/// `package_id` may be omitted in request bodies; handlers overwrite it
/// with the id from the URL path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePackageItem {
    #[serde(default)]
    pub package_id: DbId,
    pub value: String,
}

/// DTO for updating a package child item's value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePackageItem {
    pub value: Option<String>,
}
