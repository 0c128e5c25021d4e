//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type. It wraps domain-specific errors and implements
//! `IntoResponse` so handlers can return it directly.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Domain errors (`AuthError`, `ValidationError`) map their own status codes; everything
/// else becomes a 500 with a generic body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error, delegated to `AuthError::into_response()` (401).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Invalid request input, delegated to `ValidationError::into_response()` (400).
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// The message is logged; the client receives a generic message.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `ValidationErr`
/// - 401 Unauthorized - For `AuthErr`
/// - 500 Internal Server Error - For all other variants
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message so implementation details never
/// reach the client.
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
