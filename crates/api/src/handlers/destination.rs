//! Handlers for the `/destinations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use geleza_core::booking::validate_required;
use geleza_core::error::CoreError;
use geleza_core::listing::{validate_price, validate_slug};
use geleza_core::types::DbId;
use geleza_db::models::destination::{CreateDestination, Destination, UpdateDestination};
use geleza_db::repositories::DestinationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::Identity;
use crate::state::AppState;

fn validate_create(input: &CreateDestination) -> Result<(), CoreError> {
    validate_slug(&input.slug)?;
    validate_required("Name", &input.name)?;
    if let Some(price) = &input.starting_price {
        validate_price("Starting price", price)?;
    }
    Ok(())
}

/// POST /api/v1/destinations
pub async fn create(
    State(state): State<AppState>,
    identity: Identity,
    Json(input): Json<CreateDestination>,
) -> AppResult<(StatusCode, Json<Destination>)> {
    validate_create(&input)?;

    let destination = DestinationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        destination_id = destination.id,
        user_id = %identity.user_id,
        "Destination created"
    );
    Ok((StatusCode::CREATED, Json(destination)))
}

/// GET /api/v1/destinations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Destination>>> {
    let destinations = DestinationRepo::list(&state.pool).await?;
    Ok(Json(destinations))
}

/// GET /api/v1/destinations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Destination>> {
    let destination = DestinationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Destination",
            id,
        }))?;
    Ok(Json(destination))
}

/// PUT /api/v1/destinations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
    Json(input): Json<UpdateDestination>,
) -> AppResult<Json<Destination>> {
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    if let Some(price) = &input.starting_price {
        validate_price("Starting price", price)?;
    }

    let destination = DestinationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Destination",
            id,
        }))?;
    tracing::info!(destination_id = id, user_id = %identity.user_id, "Destination updated");
    Ok(Json(destination))
}

/// DELETE /api/v1/destinations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
) -> AppResult<StatusCode> {
    let deleted = DestinationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(destination_id = id, user_id = %identity.user_id, "Destination deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Destination",
            id,
        }))
    }
}
