//! Caller identity resolution.
//!
//! Every request currently acts as the same user. Handlers that need an owner take a
//! [`CurrentUser`] argument instead of hardcoding the id, so swapping in real authentication
//! only touches this extractor.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::AppError;

/// Id of the user every request acts as.
pub const DEFAULT_USER_ID: i32 = 1;

/// The user on whose behalf a request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self {
            id: DEFAULT_USER_ID,
        })
    }
}
