//! Read-only analytics queries backing the admin dashboard.
//!
//! Everything here is recomputed per request; there is no persisted derived
//! state and no cross-table snapshot. Counts from different tables may
//! reflect interleaved writes, which is acceptable at dashboard read
//! volumes.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::models::stats::{CategoryCount, DashboardStats};

/// Bucket label for packages whose category row is missing.
const UNKNOWN_CATEGORY: &str = "Unknown";

/// Provides dashboard aggregation queries.
pub struct StatsRepo;

impl StatsRepo {
    /// Per-table row counts, each an independent count query at call time.
    pub async fn dashboard_stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let (destinations,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM destinations")
            .fetch_one(pool)
            .await?;
        let (packages,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM packages")
            .fetch_one(pool)
            .await?;
        let (categories,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await?;
        let (bookings,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
            .fetch_one(pool)
            .await?;

        Ok(DashboardStats {
            destinations,
            packages,
            categories,
            bookings,
        })
    }

    /// Package counts grouped by category name.
    ///
    /// Left-joins packages to categories and groups in-process so packages
    /// with a missing category land in the `"Unknown"` bucket instead of
    /// being dropped. The resulting order is unspecified.
    pub async fn packages_by_category(pool: &PgPool) -> Result<Vec<CategoryCount>, sqlx::Error> {
        let rows: Vec<(Option<String>,)> = sqlx::query_as(
            "SELECT c.name FROM packages p LEFT JOIN categories c ON c.id = p.category_id",
        )
        .fetch_all(pool)
        .await?;

        Ok(group_by_category(
            rows.into_iter().map(|(name,)| name).collect(),
        ))
    }
}

/// Fold per-package category names into `{name, count}` buckets, mapping
/// `None` to the `"Unknown"` sentinel.
fn group_by_category(names: Vec<Option<String>>) -> Vec<CategoryCount> {
    let mut buckets: HashMap<String, i64> = HashMap::new();
    for name in names {
        let name = name.unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
        *buckets.entry(name).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(name, count)| CategoryCount { name, count })
        .collect()
}
