//! Handlers for package itinerary days.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use geleza_core::error::CoreError;
use geleza_core::types::DbId;
use geleza_db::models::package::{CreateItineraryDay, ItineraryDay, UpdateItineraryDay};
use geleza_db::repositories::ItineraryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::Identity;
use crate::state::AppState;

/// POST /api/v1/packages/{package_id}/itinerary
///
/// Overrides `input.package_id` with the value from the URL path.
pub async fn create(
    State(state): State<AppState>,
    Path(package_id): Path<DbId>,
    identity: Identity,
    Json(mut input): Json<CreateItineraryDay>,
) -> AppResult<(StatusCode, Json<ItineraryDay>)> {
    input.package_id = package_id;

    if input.day_number < 1 {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Day number must be at least 1, got {}",
            input.day_number
        ))));
    }

    let day = ItineraryRepo::create(&state.pool, &input).await?;
    tracing::info!(
        itinerary_day_id = day.id,
        package_id,
        user_id = %identity.user_id,
        "Itinerary day created"
    );
    Ok((StatusCode::CREATED, Json(day)))
}

/// GET /api/v1/packages/{package_id}/itinerary
pub async fn list_by_package(
    State(state): State<AppState>,
    Path(package_id): Path<DbId>,
) -> AppResult<Json<Vec<ItineraryDay>>> {
    let days = ItineraryRepo::list_by_package(&state.pool, package_id).await?;
    Ok(Json(days))
}

/// GET /api/v1/itinerary/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItineraryDay>> {
    let day = ItineraryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ItineraryDay",
            id,
        }))?;
    Ok(Json(day))
}

/// PUT /api/v1/itinerary/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
    Json(input): Json<UpdateItineraryDay>,
) -> AppResult<Json<ItineraryDay>> {
    if let Some(day_number) = input.day_number {
        if day_number < 1 {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Day number must be at least 1, got {day_number}"
            ))));
        }
    }

    let day = ItineraryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ItineraryDay",
            id,
        }))?;
    tracing::info!(itinerary_day_id = id, user_id = %identity.user_id, "Itinerary day updated");
    Ok(Json(day))
}

/// DELETE /api/v1/itinerary/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
) -> AppResult<StatusCode> {
    let deleted = ItineraryRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(itinerary_day_id = id, user_id = %identity.user_id, "Itinerary day deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ItineraryDay",
            id,
        }))
    }
}
