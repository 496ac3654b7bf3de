//! Top-level routes for package child rows addressed by their own id.
//!
//! Creation and listing live under `/packages/{package_id}/...`; the
//! routers here cover direct access once the child row's id is known.

use axum::routing::get;
use axum::Router;

use crate::handlers::package_item::{exclusions, gallery, highlights, inclusions};
use crate::handlers::{itinerary, review};
use crate::state::AppState;

macro_rules! item_router {
    ($fn_name:ident, $handlers:ident) => {
        /// ```text
        /// GET    /{id}    -> get_by_id
        /// PUT    /{id}    -> update
        /// DELETE /{id}    -> delete
        /// ```
        pub fn $fn_name() -> Router<AppState> {
            Router::new().route(
                "/{id}",
                get($handlers::get_by_id)
                    .put($handlers::update)
                    .delete($handlers::delete),
            )
        }
    };
}

item_router!(gallery_router, gallery);
item_router!(inclusions_router, inclusions);
item_router!(exclusions_router, exclusions);
item_router!(highlights_router, highlights);

/// Routes mounted at `/itinerary`.
///
/// ```text
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn itinerary_router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(itinerary::get_by_id)
            .put(itinerary::update)
            .delete(itinerary::delete),
    )
}

/// Routes mounted at `/reviews`.
///
/// ```text
/// GET    /        -> list (all reviews)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn reviews_router() -> Router<AppState> {
    Router::new().route("/", get(review::list)).route(
        "/{id}",
        get(review::get_by_id)
            .put(review::update)
            .delete(review::delete),
    )
}
