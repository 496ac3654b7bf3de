//! Handlers for the `/bookings` resource.
//!
//! Booking creation sends a confirmation email on a detached task after the
//! row is committed. Delivery is best-effort with exactly one attempt; a
//! failure (or an unconfigured mailer) is logged and never changes the HTTP
//! response.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use geleza_core::booking::{validate_new_booking, BookingStatus};
use geleza_core::error::CoreError;
use geleza_core::types::DbId;
use geleza_db::models::booking::{Booking, CreateBooking, UpdateBooking};
use geleza_db::repositories::BookingRepo;
use geleza_events::BookingConfirmation;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::Identity;
use crate::state::AppState;

/// Body for `PATCH /bookings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
    pub status: String,
}

/// POST /api/v1/bookings
pub async fn create(
    State(state): State<AppState>,
    identity: Identity,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    validate_new_booking(
        &input.full_name,
        &input.email,
        &input.phone,
        &input.departure_date,
        &input.return_date,
        input.travelers,
        &input.room_type,
        input.status.as_deref(),
    )?;

    let booking = BookingRepo::create(&state.pool, &input).await?;

    tracing::info!(
        booking_id = booking.id,
        package_id = booking.package_id,
        user_id = %identity.user_id,
        "Booking created"
    );

    spawn_confirmation_email(&state, &booking);

    Ok((StatusCode::CREATED, Json(booking)))
}

/// Fire off the confirmation email on a detached task.
///
/// One attempt, no retry. The booking response does not wait on this and
/// is never affected by its outcome.
fn spawn_confirmation_email(state: &AppState, booking: &Booking) {
    let Some(mailer) = state.mailer.clone() else {
        tracing::warn!(
            booking_id = booking.id,
            "Email delivery not configured, skipping confirmation"
        );
        return;
    };

    let to_email = booking.email.clone();
    let confirmation = BookingConfirmation {
        booking_id: booking.id,
        full_name: booking.full_name.clone(),
        package_title: booking.package_title.clone(),
        departure_date: booking.departure_date.clone(),
        return_date: booking.return_date.clone(),
        travelers: booking.travelers,
        created_at: booking.created_at,
    };

    tokio::spawn(async move {
        if let Err(err) = mailer
            .send_booking_confirmation(&to_email, &confirmation)
            .await
        {
            tracing::error!(
                booking_id = confirmation.booking_id,
                error = %err,
                "Failed to send booking confirmation email"
            );
        }
    });
}

/// GET /api/v1/bookings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = BookingRepo::list(&state.pool).await?;
    Ok(Json(bookings))
}

/// GET /api/v1/bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(booking))
}

/// PUT /api/v1/bookings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
    Json(input): Json<UpdateBooking>,
) -> AppResult<Json<Booking>> {
    if let Some(email) = &input.email {
        geleza_core::booking::validate_email(email)?;
    }
    if let Some(travelers) = input.travelers {
        if travelers < 1 {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Travelers must be at least 1, got {travelers}"
            ))));
        }
    }
    if let Some(status) = &input.status {
        BookingStatus::parse(status)?;
    }

    let booking = BookingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    tracing::info!(booking_id = id, user_id = %identity.user_id, "Booking updated");
    Ok(Json(booking))
}

/// PATCH /api/v1/bookings/{id}/status
///
/// Any valid status value may be set at any time; there is no transition
/// table.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
    Json(body): Json<UpdateStatusBody>,
) -> AppResult<Json<Booking>> {
    let status = BookingStatus::parse(&body.status)?;

    let booking = BookingRepo::update_status(&state.pool, id, status.as_str())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    tracing::info!(
        booking_id = id,
        status = status.as_str(),
        user_id = %identity.user_id,
        "Booking status updated"
    );
    Ok(Json(booking))
}

/// DELETE /api/v1/bookings/{id}
///
/// Idempotent: deleting an id that does not exist still returns 204.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    identity: Identity,
) -> AppResult<StatusCode> {
    let deleted = BookingRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(booking_id = id, user_id = %identity.user_id, "Booking deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
