//! Repository for the `packages` table.
//!
//! Reads are left-joined with `destinations` and `categories`; the by-slug
//! detail lookup additionally aggregates all child collections for the
//! public package page.

use geleza_core::types::DbId;
use sqlx::PgPool;

use crate::models::package::{CreatePackage, Package, PackageDetail, UpdatePackage};
use crate::models::package_item::PackageItemKind;
use crate::repositories::{ItineraryRepo, PackageItemRepo, ReviewRepo};

/// Joined column list shared across read queries. NUMERIC columns are cast
/// to text to stay decimal-safe.
const COLUMNS: &str = "p.id, p.slug, p.title, p.destination_id, p.category_id, p.duration, \
    p.price::text AS price, p.original_price::text AS original_price, \
    p.rating::text AS rating, p.review_count, p.image, p.featured, p.description, \
    d.name AS destination, d.slug AS destination_slug, \
    c.name AS category, c.slug AS category_slug";

const FROM: &str = "FROM packages p \
    LEFT JOIN destinations d ON d.id = p.destination_id \
    LEFT JOIN categories c ON c.id = p.category_id";

/// Provides CRUD operations for packages.
pub struct PackageRepo;

impl PackageRepo {
    /// Insert a new package, returning the created row with its
    /// destination and category joined in.
    pub async fn create(pool: &PgPool, input: &CreatePackage) -> Result<Package, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO packages
                (slug, title, destination_id, category_id, duration, price,
                 original_price, rating, review_count, image, featured, description)
             VALUES ($1, $2, $3, $4, $5, $6::numeric, $7::numeric, $8::numeric,
                     COALESCE($9, 0), $10, COALESCE($11, false), $12)
             RETURNING id",
        )
        .bind(&input.slug)
        .bind(&input.title)
        .bind(input.destination_id)
        .bind(input.category_id)
        .bind(&input.duration)
        .bind(&input.price)
        .bind(&input.original_price)
        .bind(&input.rating)
        .bind(input.review_count)
        .bind(&input.image)
        .bind(input.featured)
        .bind(&input.description)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a package by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Package>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE p.id = $1");
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a package by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Package>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE p.slug = $1");
        sqlx::query_as::<_, Package>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Full detail for the package with the given slug: the package row
    /// plus gallery, inclusions, exclusions, highlights, itinerary (ordered
    /// by day), and reviews.
    pub async fn detail_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<PackageDetail>, sqlx::Error> {
        let Some(package) = Self::find_by_slug(pool, slug).await? else {
            return Ok(None);
        };

        let id = package.id;
        let gallery = PackageItemRepo::list_by_package(pool, PackageItemKind::Gallery, id).await?;
        let inclusions =
            PackageItemRepo::list_by_package(pool, PackageItemKind::Inclusion, id).await?;
        let exclusions =
            PackageItemRepo::list_by_package(pool, PackageItemKind::Exclusion, id).await?;
        let highlights =
            PackageItemRepo::list_by_package(pool, PackageItemKind::Highlight, id).await?;
        let itinerary = ItineraryRepo::list_by_package(pool, id).await?;
        let reviews = ReviewRepo::list_by_package(pool, id).await?;

        Ok(Some(PackageDetail {
            package,
            gallery,
            inclusions,
            exclusions,
            highlights,
            itinerary,
            reviews,
        }))
    }

    /// List packages, optionally restricted to a destination slug.
    pub async fn list(
        pool: &PgPool,
        destination_slug: Option<&str>,
    ) -> Result<Vec<Package>, sqlx::Error> {
        match destination_slug {
            Some(slug) => {
                let query = format!("SELECT {COLUMNS} {FROM} WHERE d.slug = $1 ORDER BY p.title");
                sqlx::query_as::<_, Package>(&query)
                    .bind(slug)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} {FROM} ORDER BY p.title");
                sqlx::query_as::<_, Package>(&query).fetch_all(pool).await
            }
        }
    }

    /// List featured packages.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Package>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE p.featured = TRUE ORDER BY p.title");
        sqlx::query_as::<_, Package>(&query).fetch_all(pool).await
    }

    /// Update a package. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePackage,
    ) -> Result<Option<Package>, sqlx::Error> {
        let updated: Option<(DbId,)> = sqlx::query_as(
            "UPDATE packages SET
                slug = COALESCE($2, slug),
                title = COALESCE($3, title),
                destination_id = COALESCE($4, destination_id),
                category_id = COALESCE($5, category_id),
                duration = COALESCE($6, duration),
                price = COALESCE($7::numeric, price),
                original_price = COALESCE($8::numeric, original_price),
                rating = COALESCE($9::numeric, rating),
                review_count = COALESCE($10, review_count),
                image = COALESCE($11, image),
                featured = COALESCE($12, featured),
                description = COALESCE($13, description)
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.slug)
        .bind(&input.title)
        .bind(input.destination_id)
        .bind(input.category_id)
        .bind(&input.duration)
        .bind(&input.price)
        .bind(&input.original_price)
        .bind(&input.rating)
        .bind(input.review_count)
        .bind(&input.image)
        .bind(input.featured)
        .bind(&input.description)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some((id,)) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Delete a package by ID. Returns `true` if a row was removed.
    ///
    /// Child rows (gallery, inclusions, exclusions, highlights, itinerary,
    /// reviews) and bookings cascade at the database level.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
