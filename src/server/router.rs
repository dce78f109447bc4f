//! HTTP routing and middleware configuration.
//!
//! This module defines the application's HTTP routes: the RPC dispatch route consumed by
//! the web client, the generated API documentation, Swagger UI at `/api/docs`, and the
//! legacy `/login` redirect. It also layers session handling and route protection over
//! the complete application router.

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use utoipa_swagger_ui::{Config, SwaggerUi};

use crate::server::{controller, middleware::auth_middleware, model::app::AppState};

/// Builds the application's HTTP router with the API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET|POST /api/trpc/{procedure}` - Invoke an RPC procedure
/// - `GET /api/openapi` - API documentation generated from the registered procedures
/// - `GET /api/docs` - Swagger UI reading `/api/openapi`
/// - `GET /login` - Redirect to the sign-in page
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/trpc/{procedure}",
            get(controller::rpc::dispatch).post(controller::rpc::dispatch),
        )
        .route("/api/openapi", get(controller::openapi::openapi))
        .route("/login", get(controller::auth::login))
        .merge(SwaggerUi::new("/api/docs").config(Config::new(["/api/openapi"])))
}

/// Layers session handling and route protection over the complete application router.
///
/// The session layer wraps route protection so the middleware can read the signed-in
/// user.
pub fn with_middleware(
    router: Router,
    state: AppState,
    session: SessionManagerLayer<MemoryStore>,
) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(session)
            .layer(middleware::from_fn_with_state(state, auth_middleware)),
    )
}
