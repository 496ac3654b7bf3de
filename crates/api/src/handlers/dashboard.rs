//! Handlers for the admin dashboard analytics endpoints.

use axum::extract::State;
use axum::Json;
use geleza_db::models::stats::{CategoryCount, DashboardStats};
use geleza_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = StatsRepo::dashboard_stats(&state.pool).await?;
    Ok(Json(stats))
}

/// GET /api/v1/dashboard/packages-by-category
pub async fn packages_by_category(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoryCount>>> {
    let counts = StatsRepo::packages_by_category(&state.pool).await?;
    Ok(Json(counts))
}
