//! Route definitions for the `/packages` resource.
//!
//! Also nests the per-package child collections (gallery, inclusions,
//! exclusions, highlights, itinerary, reviews) under
//! `/packages/{package_id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::package_item::{exclusions, gallery, highlights, inclusions};
use crate::handlers::{itinerary, package, review};
use crate::state::AppState;

/// Routes mounted at `/packages`.
///
/// ```text
/// GET    /                              -> list (?destination_slug=...)
/// POST   /                              -> create
/// GET    /featured                      -> list_featured
/// GET    /by-slug/{slug}                -> get_by_slug (full detail)
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
///
/// GET    /{package_id}/gallery          -> list
/// POST   /{package_id}/gallery          -> create
/// GET    /{package_id}/inclusions       -> list
/// POST   /{package_id}/inclusions       -> create
/// GET    /{package_id}/exclusions       -> list
/// POST   /{package_id}/exclusions       -> create
/// GET    /{package_id}/highlights       -> list
/// POST   /{package_id}/highlights       -> create
/// GET    /{package_id}/itinerary        -> list_by_package
/// POST   /{package_id}/itinerary        -> create
/// GET    /{package_id}/reviews          -> list_by_package
/// POST   /{package_id}/reviews          -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(package::list).post(package::create))
        .route("/featured", get(package::list_featured))
        .route("/by-slug/{slug}", get(package::get_by_slug))
        .route(
            "/{id}",
            get(package::get_by_id)
                .put(package::update)
                .delete(package::delete),
        )
        .route(
            "/{package_id}/gallery",
            get(gallery::list).post(gallery::create),
        )
        .route(
            "/{package_id}/inclusions",
            get(inclusions::list).post(inclusions::create),
        )
        .route(
            "/{package_id}/exclusions",
            get(exclusions::list).post(exclusions::create),
        )
        .route(
            "/{package_id}/highlights",
            get(highlights::list).post(highlights::create),
        )
        .route(
            "/{package_id}/itinerary",
            get(itinerary::list_by_package).post(itinerary::create),
        )
        .route(
            "/{package_id}/reviews",
            get(review::list_by_package).post(review::create),
        )
}
