use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::api::RpcSuccessEnvelope,
    server::{
        error::rpc::RpcError,
        model::app::AppState,
        rpc::RpcContext,
    },
};

/// Query string accepted by the dispatch route
#[derive(Debug, Default, Deserialize)]
pub struct RpcQuery {
    /// JSON encoded procedure input for queries
    pub input: Option<String>,
}

/// Dispatches `GET` and `POST` requests on `/api/trpc/{procedure}`.
///
/// Queries read their input from the JSON encoded `input` query parameter and mutations
/// from the JSON request body. Missing input is passed on as null, which procedures
/// treat as an empty object.
///
/// # Responses
/// - 200 OK - `{"result": {"data": ...}}`
/// - 4xx/5xx - `{"error": {"message", "code", "data": {"code", "httpStatus", "path"}}}`
pub async fn dispatch(
    State(state): State<AppState>,
    session: Session,
    method: Method,
    Path(procedure): Path<String>,
    Query(query): Query<RpcQuery>,
    body: Bytes,
) -> Response {
    match call(&state, session, &method, &procedure, query, body).await {
        Ok(data) => Json(RpcSuccessEnvelope::new(data)).into_response(),
        Err(e) => {
            tracing::debug!(
                procedure = %procedure,
                code = e.code.as_str(),
                "Procedure call failed: {}",
                e.message
            );

            e.with_path(procedure).into_response()
        }
    }
}

async fn call(
    state: &AppState,
    session: Session,
    method: &Method,
    procedure: &str,
    query: RpcQuery,
    body: Bytes,
) -> Result<Value, RpcError> {
    let input = if method == Method::GET {
        parse_input(query.input.as_deref().unwrap_or_default().as_bytes())?
    } else {
        parse_input(&body)?
    };

    let ctx = RpcContext::from_session(state.db.clone(), session).await?;

    state.rpc.call(procedure, method, ctx, input).await
}

/// Parses raw JSON input, treating empty input as null.
fn parse_input(raw: &[u8]) -> Result<Value, RpcError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(raw)
        .map_err(|e| RpcError::parse_error(format!("Failed to parse input: {}", e)))
}
