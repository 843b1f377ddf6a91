//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type and implements `IntoResponse` for automatic error handling in API endpoints.
//!
//! Two body shapes are in use: `{"error": ...}` for lookups that miss and for internal
//! failures, `{"msg": ...}` for rejected create requests and unknown favorite types.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::error::config::ConfigError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure variants use `#[from]` for
/// automatic conversion and always map to 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Covers storage failures such as uniqueness or foreign key violations. Results in
    /// 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener error while starting the server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with `{"error": <message>}`.
    #[error("{0}")]
    NotFound(String),

    /// A create request is missing a required field or has a malformed body.
    ///
    /// Results in 400 Bad Request with `{"msg": <message>}`.
    #[error("{0}")]
    BadRequest(String),

    /// The item type segment of a favorite request is not `planet`, `warrior` or `spaceship`.
    ///
    /// Results in 404 Not Found with `{"msg": "Invalid favorite type"}`.
    #[error("Invalid favorite type '{0}'")]
    InvalidFavoriteType(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Malformed or missing JSON bodies are reported like a missing field.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// A path that does not parse (e.g. `/planets/abc`) does not name any resource.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path: {}", rejection.body_text());
        AppError::NotFound("Resource not found".to_string())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, body `{"msg": ...}`
/// - 404 Not Found - For `NotFound`, body `{"error": ...}`
/// - 404 Not Found - For `InvalidFavoriteType`, body `{"msg": ...}`
/// - 500 Internal Server Error - For all other error types, body `{"error": ...}`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(MessageDto { msg })).into_response()
            }
            Self::InvalidFavoriteType(item_type) => {
                tracing::debug!("Invalid favorite type: {}", item_type);
                (
                    StatusCode::NOT_FOUND,
                    Json(MessageDto {
                        msg: "Invalid favorite type".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
