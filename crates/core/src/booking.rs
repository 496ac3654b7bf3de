//! Booking status domain and input validation.
//!
//! Validation rejects malformed input before any storage call is made.
//! Status transitions are deliberately unconstrained beyond the enum
//! domain: any of the four values can be set at any time via the
//! status-update operation.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// All valid booking status strings.
pub const VALID_BOOKING_STATUSES: &[&str] =
    &["pending", "confirmed", "cancelled", "completed"];

impl BookingStatus {
    /// Return the status as a lowercase string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Parse a status from a string slice.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(CoreError::Validation(format!(
                "Invalid booking status '{s}'. Must be one of: {}",
                VALID_BOOKING_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that an email address is structurally plausible.
///
/// Requires exactly one `@`, a non-empty local part, a domain containing a
/// dot with non-empty labels around it, and no whitespace anywhere.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid email address '{email}'"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid()),
    };

    if local.is_empty() || domain.is_empty() {
        return Err(invalid());
    }

    // The domain must contain at least one dot with labels on both sides.
    let has_dotted_label = domain
        .split('.')
        .all(|label| !label.is_empty())
        && domain.contains('.');
    if !has_dotted_label {
        return Err(invalid());
    }

    Ok(())
}

/// Validate that a required string field is non-empty (ignoring whitespace).
pub fn validate_required(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

/// Validate the input contract for creating a booking.
///
/// Checks, in order: full name, email format, phone, departure and return
/// dates, travelers >= 1, room type, and (when present) status enum
/// membership. The first violation is returned.
#[allow(clippy::too_many_arguments)]
pub fn validate_new_booking(
    full_name: &str,
    email: &str,
    phone: &str,
    departure_date: &str,
    return_date: &str,
    travelers: i32,
    room_type: &str,
    status: Option<&str>,
) -> Result<(), CoreError> {
    validate_required("Full name", full_name)?;
    validate_email(email)?;
    validate_required("Phone", phone)?;
    validate_required("Departure date", departure_date)?;
    validate_required("Return date", return_date)?;

    if travelers < 1 {
        return Err(CoreError::Validation(format!(
            "Travelers must be at least 1, got {travelers}"
        )));
    }

    validate_required("Room type", room_type)?;

    if let Some(status) = status {
        BookingStatus::parse(status)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
