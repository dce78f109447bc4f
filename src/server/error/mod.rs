//! Error types for the Wamumbi server application.
//!
//! This module provides the error handling system for the server, with specialized error
//! types for configuration, authentication, and RPC failures. All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their definitions.

/// Session authentication failures
pub mod auth;
/// Configuration loading failures
pub mod config;
/// RPC error codes and the error envelope
pub mod rpc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Main error type for the Wamumbi server application.
///
/// Aggregates domain-specific errors and external library errors into a single type. The
/// `#[from]` conversions allow `?` to be used across services, repositories, and
/// controllers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing or stale session user).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// A requested record does not exist.
    #[error("{entity} with ID {id} not found")]
    NotFound {
        /// Kind of record that was looked up
        entity: &'static str,
        /// ID that was looked up
        id: i32,
    },
    /// Input was rejected by a business rule.
    #[error("{0}")]
    Validation(String),
    /// The operation conflicts with the current state of a record.
    #[error("{0}")]
    Conflict(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Wamumbi's code.
    #[error("Internal error with Wamumbi's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation failures
/// - 401 Unauthorized / 404 Not Found - For authentication errors
/// - 404 Not Found - For missing records
/// - 409 Conflict - For conflicting state
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::NotFound { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            Self::Conflict(message) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: message })).into_response()
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
