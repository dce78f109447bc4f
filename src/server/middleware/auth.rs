use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::auth::SIGN_IN_PATH,
        error::rpc::RpcError,
        middleware::matcher::RouteMatcher,
        model::{app::AppState, session::user::SessionUserId},
    },
};

/// Requires a signed-in user on protected routes.
///
/// Public routes and static assets pass through untouched. Requests to protected routes
/// without a user in session are rejected:
/// - `/api/trpc/*` - 401 with an RPC error envelope
/// - other `/api/*` routes - 401 with an [`ErrorDto`]
/// - pages - 307 temporary redirect to the sign-in page
pub async fn auth_middleware(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if !RouteMatcher::applies_to(&path) || state.route_matcher.is_public(&path) {
        return next.run(request).await;
    }

    match SessionUserId::get(&session).await {
        Ok(Some(_)) => next.run(request).await,
        Ok(None) => {
            tracing::debug!(path = %path, "Rejected unauthenticated request to protected route");

            unauthenticated(&path)
        }
        Err(e) => e.into_response(),
    }
}

fn unauthenticated(path: &str) -> Response {
    if let Some(procedure) = path.strip_prefix("/api/trpc/") {
        return RpcError::unauthorized("You need to sign in to call this procedure")
            .with_path(procedure)
            .into_response();
    }

    if path == "/api" || path.starts_with("/api/") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "You need to sign in to access this resource".to_string(),
            }),
        )
            .into_response();
    }

    Redirect::temporary(SIGN_IN_PATH).into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::{header::LOCATION, StatusCode};

    use super::unauthenticated;

    #[test]
    fn redirects_pages_to_sign_in() {
        let resp = unauthenticated("/campaigns");

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers()[LOCATION], "/sign-in");
    }

    #[test]
    /// Expect API routes to receive 401 rather than a redirect
    fn rejects_api_routes() {
        assert_eq!(
            unauthenticated("/api/trpc/campaign.create").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(unauthenticated("/api/docs").status(), StatusCode::UNAUTHORIZED);
    }
}
