//! Route definitions for the `/bookings` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create (sends confirmation email async)
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete (idempotent)
/// PATCH  /{id}/status    -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(booking::list).post(booking::create))
        .route(
            "/{id}",
            get(booking::get_by_id)
                .put(booking::update)
                .delete(booking::delete),
        )
        .route("/{id}/status", patch(booking::update_status))
}
