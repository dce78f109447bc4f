use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::api::{RpcErrorData, RpcErrorEnvelope, RpcErrorShape},
    server::error::{auth::AuthError, Error},
};

/// Error codes understood by RPC clients.
///
/// Each code maps to a JSON-RPC 2.0 numeric code and an HTTP status, which are both
/// included in the error envelope returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcErrorCode {
    /// Request input was not valid JSON.
    ParseError,
    /// Input did not match the procedure's expected shape or failed validation.
    BadRequest,
    /// A signed-in user is required.
    Unauthorized,
    /// The signed-in user may not perform the operation.
    Forbidden,
    /// The procedure or the requested record does not exist.
    NotFound,
    /// The procedure exists but was called with the wrong HTTP method.
    MethodNotSupported,
    /// The operation conflicts with the current state of a record.
    Conflict,
    /// Unexpected failure on the server.
    InternalServerError,
}

impl RpcErrorCode {
    /// Upper snake case name used in `error.data.code`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ParseError => "PARSE_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotSupported => "METHOD_NOT_SUPPORTED",
            Self::Conflict => "CONFLICT",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// JSON-RPC 2.0 numeric code used in `error.code`
    pub fn json_rpc_code(&self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::BadRequest => -32600,
            Self::InternalServerError => -32603,
            Self::Unauthorized => -32001,
            Self::Forbidden => -32003,
            Self::NotFound => -32004,
            Self::MethodNotSupported => -32005,
            Self::Conflict => -32009,
        }
    }

    /// HTTP status of responses carrying this code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ParseError | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotSupported => StatusCode::METHOD_NOT_ALLOWED,
            Self::Conflict => StatusCode::CONFLICT,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error returned by an RPC procedure or by the dispatcher itself.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct RpcError {
    /// Error classification
    pub code: RpcErrorCode,
    /// Message shown to the caller
    pub message: String,
    /// Procedure path, filled in by the dispatcher
    pub path: Option<String>,
}

impl RpcError {
    /// Creates an error with no procedure path attached
    pub fn new(code: RpcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// [`RpcErrorCode::ParseError`]
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::ParseError, message)
    }

    /// [`RpcErrorCode::BadRequest`]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::BadRequest, message)
    }

    /// [`RpcErrorCode::Unauthorized`]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::Unauthorized, message)
    }

    /// [`RpcErrorCode::NotFound`]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::NotFound, message)
    }

    /// [`RpcErrorCode::MethodNotSupported`]
    pub fn method_not_supported(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::MethodNotSupported, message)
    }

    /// Generic internal error, the underlying cause should already have been logged
    pub fn internal() -> Self {
        Self::new(RpcErrorCode::InternalServerError, "Internal server error")
    }

    /// Attach the procedure path the error originated from
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Build the JSON envelope returned to the caller
    pub fn envelope(&self) -> RpcErrorEnvelope {
        RpcErrorEnvelope {
            error: RpcErrorShape {
                message: self.message.clone(),
                code: self.code.json_rpc_code(),
                data: RpcErrorData {
                    code: self.code.as_str().to_string(),
                    http_status: self.code.http_status().as_u16(),
                    path: self.path.clone(),
                },
            },
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        (self.code.http_status(), Json(self.envelope())).into_response()
    }
}

/// Maps server errors onto RPC error codes.
///
/// Client-caused errors keep their message. Everything else is logged and replaced with a
/// generic message so internal details never reach the caller.
impl From<Error> for RpcError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound { .. } => {
                tracing::debug!("{}", err);

                Self::not_found(err.to_string())
            }
            Error::Validation(message) => Self::bad_request(message),
            Error::Conflict(message) => Self::new(RpcErrorCode::Conflict, message),
            Error::AuthError(AuthError::UserNotInSession) => {
                Self::unauthorized("You need to sign in to call this procedure")
            }
            Error::AuthError(AuthError::UserNotInDatabase(user_id)) => {
                tracing::debug!(user_id = %user_id, "Session user missing from database");

                Self::unauthorized("You need to sign in to call this procedure")
            }
            err => {
                tracing::error!("Internal server error: {}", err);

                Self::internal()
            }
        }
    }
}
