//! Dashboard analytics response types.

use serde::Serialize;

/// Per-table row counts for the admin dashboard, each computed by an
/// independent count query at call time.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub destinations: i64,
    pub packages: i64,
    pub categories: i64,
    pub bookings: i64,
}

/// One bucket of the package-per-category distribution.
///
/// Packages whose category row is missing fall into the `"Unknown"` bucket.
/// Bucket ordering is unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: i64,
}
