pub mod booking;
pub mod category;
pub mod dashboard;
pub mod destination;
pub mod health;
pub mod package;
pub mod package_item;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                              list, create
/// /categories/{id}                         get, update, delete
///
/// /destinations                            list, create
/// /destinations/{id}                       get, update, delete
///
/// /packages                                list (?destination_slug), create
/// /packages/featured                       featured packages (GET)
/// /packages/by-slug/{slug}                 full package detail (GET)
/// /packages/{id}                           get, update, delete
/// /packages/{package_id}/gallery           list, create
/// /packages/{package_id}/inclusions        list, create
/// /packages/{package_id}/exclusions        list, create
/// /packages/{package_id}/highlights        list, create
/// /packages/{package_id}/itinerary         list, create
/// /packages/{package_id}/reviews           list, create
///
/// /gallery/{id}                            get, update, delete
/// /inclusions/{id}                         get, update, delete
/// /exclusions/{id}                         get, update, delete
/// /highlights/{id}                         get, update, delete
/// /itinerary/{id}                          get, update, delete
///
/// /reviews                                 list all (GET)
/// /reviews/{id}                            get, update, delete
///
/// /bookings                                list, create
/// /bookings/{id}                           get, update, delete (idempotent)
/// /bookings/{id}/status                    update status (PATCH)
///
/// /dashboard/stats                         per-table row counts (GET)
/// /dashboard/packages-by-category          package distribution (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog taxonomy.
        .nest("/categories", category::router())
        .nest("/destinations", destination::router())
        // Packages and their nested child collections.
        .nest("/packages", package::router())
        // Direct access to child rows by their own id.
        .nest("/gallery", package_item::gallery_router())
        .nest("/inclusions", package_item::inclusions_router())
        .nest("/exclusions", package_item::exclusions_router())
        .nest("/highlights", package_item::highlights_router())
        .nest("/itinerary", package_item::itinerary_router())
        .nest("/reviews", package_item::reviews_router())
        // Booking lifecycle.
        .nest("/bookings", booking::router())
        // Admin dashboard analytics.
        .nest("/dashboard", dashboard::router())
}
