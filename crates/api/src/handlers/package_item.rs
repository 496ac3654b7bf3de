//! Handlers for the four single-value package child collections
//! (gallery, inclusions, exclusions, highlights).
//!
//! All four resources share one handler body parameterized by
//! [`PackageItemKind`]; the per-kind functions below exist only so each
//! route can bind a concrete kind.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use geleza_core::booking::validate_required;
use geleza_core::error::CoreError;
use geleza_core::types::DbId;
use geleza_db::models::package_item::{
    CreatePackageItem, PackageItem, PackageItemKind, UpdatePackageItem,
};
use geleza_db::repositories::PackageItemRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::Identity;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared bodies
// ---------------------------------------------------------------------------

async fn create_inner(
    state: &AppState,
    kind: PackageItemKind,
    identity: &Identity,
    package_id: DbId,
    mut input: CreatePackageItem,
) -> AppResult<(StatusCode, Json<PackageItem>)> {
    input.package_id = package_id;
    validate_required("Value", &input.value)?;

    let item = PackageItemRepo::create(&state.pool, kind, &input).await?;
    tracing::info!(
        entity = kind.entity(),
        item_id = item.id,
        package_id,
        user_id = %identity.user_id,
        "Package item created"
    );
    Ok((StatusCode::CREATED, Json(item)))
}

async fn list_inner(
    state: &AppState,
    kind: PackageItemKind,
    package_id: DbId,
) -> AppResult<Json<Vec<PackageItem>>> {
    let items = PackageItemRepo::list_by_package(&state.pool, kind, package_id).await?;
    Ok(Json(items))
}

async fn get_inner(
    state: &AppState,
    kind: PackageItemKind,
    id: DbId,
) -> AppResult<Json<PackageItem>> {
    let item = PackageItemRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }))?;
    Ok(Json(item))
}

async fn update_inner(
    state: &AppState,
    kind: PackageItemKind,
    identity: &Identity,
    id: DbId,
    input: UpdatePackageItem,
) -> AppResult<Json<PackageItem>> {
    let item = PackageItemRepo::update(&state.pool, kind, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }))?;
    tracing::info!(
        entity = kind.entity(),
        item_id = id,
        user_id = %identity.user_id,
        "Package item updated"
    );
    Ok(Json(item))
}

async fn delete_inner(
    state: &AppState,
    kind: PackageItemKind,
    identity: &Identity,
    id: DbId,
) -> AppResult<StatusCode> {
    let deleted = PackageItemRepo::delete(&state.pool, kind, id).await?;
    if deleted {
        tracing::info!(
            entity = kind.entity(),
            item_id = id,
            user_id = %identity.user_id,
            "Package item deleted"
        );
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Per-kind handlers
// ---------------------------------------------------------------------------

macro_rules! item_handlers {
    ($mod_name:ident, $kind:expr) => {
        pub mod $mod_name {
            use super::*;

            /// POST /api/v1/packages/{package_id}/<kind>
            pub async fn create(
                State(state): State<AppState>,
                Path(package_id): Path<DbId>,
                identity: Identity,
                Json(input): Json<CreatePackageItem>,
            ) -> AppResult<(StatusCode, Json<PackageItem>)> {
                create_inner(&state, $kind, &identity, package_id, input).await
            }

            /// GET /api/v1/packages/{package_id}/<kind>
            pub async fn list(
                State(state): State<AppState>,
                Path(package_id): Path<DbId>,
            ) -> AppResult<Json<Vec<PackageItem>>> {
                list_inner(&state, $kind, package_id).await
            }

            /// GET /api/v1/<kind>/{id}
            pub async fn get_by_id(
                State(state): State<AppState>,
                Path(id): Path<DbId>,
            ) -> AppResult<Json<PackageItem>> {
                get_inner(&state, $kind, id).await
            }

            /// PUT /api/v1/<kind>/{id}
            pub async fn update(
                State(state): State<AppState>,
                Path(id): Path<DbId>,
                identity: Identity,
                Json(input): Json<UpdatePackageItem>,
            ) -> AppResult<Json<PackageItem>> {
                update_inner(&state, $kind, &identity, id, input).await
            }

            /// DELETE /api/v1/<kind>/{id}
            pub async fn delete(
                State(state): State<AppState>,
                Path(id): Path<DbId>,
                identity: Identity,
            ) -> AppResult<StatusCode> {
                delete_inner(&state, $kind, &identity, id).await
            }
        }
    };
}

item_handlers!(gallery, PackageItemKind::Gallery);
item_handlers!(inclusions, PackageItemKind::Inclusion);
item_handlers!(exclusions, PackageItemKind::Exclusion);
item_handlers!(highlights, PackageItemKind::Highlight);
