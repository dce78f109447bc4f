use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures resolving the signed-in user from the session.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session
    #[error("User ID is not present in session")]
    UserNotInSession,
    /// Session refers to a user that no longer exists
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "You need to sign in to access this resource".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
