//! Per-request caller identity placeholder.
//!
//! Real authentication is out of scope; the identity carried here exists
//! so mutations can be attributed in logs and so a session layer can slot
//! in later without changing handler signatures.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

/// Header clients may use to identify themselves.
const USER_ID_HEADER: &str = "x-user-id";

/// Fallback identity when no header is provided.
const ANONYMOUS_USER: &str = "user_123";

/// The caller identity reconstructed for each request.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(ANONYMOUS_USER)
            .to_string();

        Ok(Identity { user_id })
    }
}
