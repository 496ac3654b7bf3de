//! Handlers for the `/packages` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use geleza_core::booking::validate_required;
use geleza_core::error::CoreError;
use geleza_core::listing::{validate_price, validate_slug};
use geleza_core::types::DbId;
use geleza_db::models::package::{CreatePackage, Package, PackageDetail, UpdatePackage};
use geleza_db::repositories::PackageRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::Identity;
use crate::state::AppState;

/// Query params for `GET /packages`.
#[derive(Debug, Deserialize)]
pub struct ListPackagesQuery {
    /// Restrict to packages of this destination.
    pub destination_slug: Option<String>,
}

fn validate_create(input: &CreatePackage) -> Result<(), CoreError> {
    validate_slug(&input.slug)?;
    validate_required("Title", &input.title)?;
    validate_price("Price", &input.price)?;
    if let Some(price) = &input.original_price {
        validate_price("Original price", price)?;
    }
    Ok(())
}

/// POST /api/v1/packages
pub async fn create(
    State(state): State<AppState>,
    identity: Identity,
    Json(input): Json<CreatePackage>,
) -> AppResult<(StatusCode, Json<Package>)> {
    validate_create(&input)?;

    let package = PackageRepo::create(&state.pool, &input).await?;
    tracing::info!(package_id = package.id, user_id = %identity.user_id, "Package created");
    Ok((StatusCode::CREATED, Json(package)))
}

/// GET /api/v1/packages?destination_slug=...
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListPackagesQuery>,
) -> AppResult<Json<Vec<Package>>> {
    let packages = PackageRepo::list(&state.pool, params.destination_slug.as_deref()).await?;
    Ok(Json(packages))
}

/// GET /api/v1/packages/featured
pub async fn list_featured(State(state): State<AppState>) -> AppResult<Json<Vec<Package>>> {
    let packages = PackageRepo::list_featured(&state.pool).await?;
    Ok(Json(packages))
}

/// GET /api/v1/packages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Package>> {
    let package = PackageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))?;
    Ok(Json(package))
}

/// GET /api/v1/packages/by-slug/{slug}
///
/// Full package detail: the row plus gallery, inclusions, exclusions,
/// highlights, itinerary, and reviews.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PackageDetail>> {
    let detail = PackageRepo::detail_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Package with slug '{slug}' not found")))?;
    Ok(Json(detail))
}

/// PUT /api/v1/packages/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
    Json(input): Json<UpdatePackage>,
) -> AppResult<Json<Package>> {
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    if let Some(price) = &input.price {
        validate_price("Price", price)?;
    }
    if let Some(price) = &input.original_price {
        validate_price("Original price", price)?;
    }

    let package = PackageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))?;
    tracing::info!(package_id = id, user_id = %identity.user_id, "Package updated");
    Ok(Json(package))
}

/// DELETE /api/v1/packages/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
) -> AppResult<StatusCode> {
    let deleted = PackageRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(package_id = id, user_id = %identity.user_id, "Package deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))
    }
}
