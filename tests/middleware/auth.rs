use axum::{
    http::{header::LOCATION, StatusCode},
    routing::get as route_get,
    Router,
};
use serde_json::json;
use wamumbi::server::{middleware::RouteMatcher, model::app::AppState};
use wamumbi_test_utils::prelude::*;

use crate::util::setup::{
    app_with_routes, body_json, get, post_json, send, session_cookie, with_cookie,
};

/// Stand-in for the page router
fn pages() -> Router {
    Router::new()
        .route("/", route_get(|| async { "home" }))
        .route("/campaigns", route_get(|| async { "campaigns" }))
}

fn protected_state(test: &TestSetup) -> AppState {
    let matcher = RouteMatcher::new([
        "/",
        "/sign-in(.*)",
        "/api/openapi",
        "/api/trpc/user.sync",
    ])
    .unwrap();

    AppState::new(test.state.db.clone(), matcher)
}

#[tokio::test]
/// Expect every route to be reachable without a session using the default routes
async fn default_routes_leave_everything_public() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app_with_routes(pages(), test.state::<AppState>());

    let page = send(&app, get("/campaigns")).await;
    let procedure = send(&app, get("/api/trpc/campaign.list")).await;

    assert_eq!(page.status(), StatusCode::OK);
    assert_eq!(procedure.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect protected pages to redirect to sign-in and protected API routes to return 401
async fn rejects_protected_routes_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app_with_routes(pages(), protected_state(&test));

    let page = send(&app, get("/campaigns")).await;
    assert_eq!(page.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(page.headers()[LOCATION], "/sign-in");

    let procedure = send(&app, get("/api/trpc/campaign.list")).await;
    assert_eq!(procedure.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(procedure).await;
    assert_eq!(body["error"]["data"]["code"], "UNAUTHORIZED");
    assert_eq!(body["error"]["data"]["path"], "campaign.list");

    Ok(())
}

#[tokio::test]
async fn passes_public_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app_with_routes(pages(), protected_state(&test));

    assert_eq!(send(&app, get("/")).await.status(), StatusCode::OK);
    assert_eq!(send(&app, get("/api/openapi")).await.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect static assets to skip protection and fall through to routing
async fn skips_static_assets() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app_with_routes(pages(), protected_state(&test));

    let resp = send(&app, get("/assets/main.css")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect protected routes to pass once a user is in session
async fn passes_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app_with_routes(pages(), protected_state(&test));

    let synced = send(
        &app,
        post_json(
            "/api/trpc/user.sync",
            json!({ "auth_id": "user_2abc", "email": "amina@example.org" }),
        ),
    )
    .await;
    assert_eq!(synced.status(), StatusCode::OK);
    let cookie = session_cookie(&synced);

    let page = send(&app, with_cookie(get("/campaigns"), &cookie)).await;

    assert_eq!(page.status(), StatusCode::OK);

    Ok(())
}
