//! Shared validation for catalog entities (categories, destinations,
//! packages, reviews).

use crate::booking::validate_required;
use crate::error::CoreError;

/// Minimum review rating.
pub const MIN_REVIEW_RATING: i32 = 1;

/// Maximum review rating.
pub const MAX_REVIEW_RATING: i32 = 5;

/// Validate a URL slug: non-empty, lowercase ASCII letters, digits, and
/// hyphens only.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    validate_required("Slug", slug)?;

    let valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Must contain only lowercase letters, digits, and hyphens"
        )));
    }

    Ok(())
}

/// Validate that a price field is a decimal-safe string.
///
/// Prices travel as strings end to end (never floating point). Accepts an
/// optional integral part, an optional fractional part of at most two
/// digits, and requires at least one digit overall.
pub fn validate_price(field: &'static str, value: &str) -> Result<(), CoreError> {
    let invalid = || {
        CoreError::Validation(format!(
            "{field} must be a decimal string like '1499.00', got '{value}'"
        ))
    };

    let (integral, fractional) = match value.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (value, None),
    };

    if integral.is_empty() && fractional.is_none_or(str::is_empty) {
        return Err(invalid());
    }
    if !integral.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if let Some(f) = fractional {
        if f.len() > 2 || !f.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
    }

    Ok(())
}

/// Validate that a review rating is within the 1-5 range.
pub fn validate_review_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_REVIEW_RATING..=MAX_REVIEW_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_REVIEW_RATING} and {MAX_REVIEW_RATING}, got {rating}"
        )))
    }
}
