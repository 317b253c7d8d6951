//! Caller identity extraction.
//!
//! Authentication is the fronting gateway's concern in this deployment; the
//! gateway forwards the authenticated user's id in the `x-user-id` header.
//! Handlers require identity by taking an [`AuthUser`] argument.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use courier_core::types::DbId;

use crate::error::AppError;

/// Header carrying the gateway-authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller, extracted from request headers.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: DbId,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<DbId>().ok())
            .ok_or_else(|| {
                AppError::Unauthorized(format!("Missing or invalid {USER_ID_HEADER} header"))
            })?;

        Ok(AuthUser { user_id })
    }
}
