//! Route definitions for the `/dashboard` analytics endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /stats                  -> per-table row counts
/// GET /packages-by-category   -> package distribution buckets
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard::stats))
        .route("/packages-by-category", get(dashboard::packages_by_category))
}
