use axum::{
    extract::State,
    http::header::CACHE_CONTROL,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;

use crate::server::{model::app::AppState, openapi::fallback_document};

/// Serves the API documentation generated from the registered procedures.
///
/// The document is rendered on every request and never cached. Generation failures are
/// logged and answered with the fallback document, still with `200 OK`.
pub async fn openapi(State(state): State<AppState>) -> Response {
    let document = match state.docs().document(&state.rpc) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!("Failed to generate API documentation, serving fallback: {}", e);

            fallback_document()
        }
    };

    ([(CACHE_CONTROL, "no-store")], Json(document)).into_response()
}
