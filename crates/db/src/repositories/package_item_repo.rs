//! Generic repository for the four single-value package child tables.
//!
//! Gallery images, inclusions, exclusions, and highlights all share the
//! shape `(id, package_id, <text column>)`; one repository covers them,
//! parameterized by [`PackageItemKind`]. Table and column names come from
//! the kind's static accessors, never from request input.

use geleza_core::types::DbId;
use sqlx::PgPool;

use crate::models::package_item::{
    CreatePackageItem, PackageItem, PackageItemKind, UpdatePackageItem,
};

/// Provides CRUD operations for package child items.
pub struct PackageItemRepo;

impl PackageItemRepo {
    /// Insert a new item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        kind: PackageItemKind,
        input: &CreatePackageItem,
    ) -> Result<PackageItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (package_id, {column})
             VALUES ($1, $2)
             RETURNING id, package_id, {column} AS value",
            table = kind.table(),
            column = kind.column(),
        );
        sqlx::query_as::<_, PackageItem>(&query)
            .bind(input.package_id)
            .bind(&input.value)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        kind: PackageItemKind,
        id: DbId,
    ) -> Result<Option<PackageItem>, sqlx::Error> {
        let query = format!(
            "SELECT id, package_id, {column} AS value FROM {table} WHERE id = $1",
            table = kind.table(),
            column = kind.column(),
        );
        sqlx::query_as::<_, PackageItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items of a kind for a package, in insertion order.
    pub async fn list_by_package(
        pool: &PgPool,
        kind: PackageItemKind,
        package_id: DbId,
    ) -> Result<Vec<PackageItem>, sqlx::Error> {
        let query = format!(
            "SELECT id, package_id, {column} AS value FROM {table}
             WHERE package_id = $1
             ORDER BY id",
            table = kind.table(),
            column = kind.column(),
        );
        sqlx::query_as::<_, PackageItem>(&query)
            .bind(package_id)
            .fetch_all(pool)
            .await
    }

    /// Update an item's value. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn update(
        pool: &PgPool,
        kind: PackageItemKind,
        id: DbId,
        input: &UpdatePackageItem,
    ) -> Result<Option<PackageItem>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET {column} = COALESCE($2, {column})
             WHERE id = $1
             RETURNING id, package_id, {column} AS value",
            table = kind.table(),
            column = kind.column(),
        );
        sqlx::query_as::<_, PackageItem>(&query)
            .bind(id)
            .bind(&input.value)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by ID. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        kind: PackageItemKind,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {table} WHERE id = $1", table = kind.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
