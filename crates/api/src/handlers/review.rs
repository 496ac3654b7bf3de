//! Handlers for the `/reviews` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use geleza_core::booking::validate_required;
use geleza_core::error::CoreError;
use geleza_core::listing::validate_review_rating;
use geleza_core::types::DbId;
use geleza_db::models::review::{CreateReview, Review, UpdateReview};
use geleza_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::Identity;
use crate::state::AppState;

/// POST /api/v1/packages/{package_id}/reviews
///
/// Overrides `input.package_id` with the value from the URL path.
pub async fn create(
    State(state): State<AppState>,
    Path(package_id): Path<DbId>,
    identity: Identity,
    Json(mut input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    input.package_id = package_id;
    validate_required("User name", &input.user_name)?;
    validate_review_rating(input.rating)?;

    let review = ReviewRepo::create(&state.pool, &input).await?;
    tracing::info!(
        review_id = review.id,
        package_id,
        user_id = %identity.user_id,
        "Review created"
    );
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/v1/reviews
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list(&state.pool).await?;
    Ok(Json(reviews))
}

/// GET /api/v1/packages/{package_id}/reviews
pub async fn list_by_package(
    State(state): State<AppState>,
    Path(package_id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list_by_package(&state.pool, package_id).await?;
    Ok(Json(reviews))
}

/// GET /api/v1/reviews/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Review>> {
    let review = ReviewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))?;
    Ok(Json(review))
}

/// PUT /api/v1/reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
    Json(input): Json<UpdateReview>,
) -> AppResult<Json<Review>> {
    if let Some(rating) = input.rating {
        validate_review_rating(rating)?;
    }

    let review = ReviewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))?;
    tracing::info!(review_id = id, user_id = %identity.user_id, "Review updated");
    Ok(Json(review))
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
) -> AppResult<StatusCode> {
    let deleted = ReviewRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(review_id = id, user_id = %identity.user_id, "Review deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))
    }
}
