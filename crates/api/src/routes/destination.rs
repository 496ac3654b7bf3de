//! Route definitions for the `/destinations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::destination;
use crate::state::AppState;

/// Routes mounted at `/destinations`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(destination::list).post(destination::create))
        .route(
            "/{id}",
            get(destination::get_by_id)
                .put(destination::update)
                .delete(destination::delete),
        )
}
