use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        Request, Response,
    },
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use wamumbi::server::{model::app::AppState, router};
use wamumbi_test_utils::TestSetup;

/// Full API router with session handling and route protection over the test database
pub fn app(test: &TestSetup) -> Router {
    app_with_state(test.state::<AppState>())
}

pub fn app_with_state(state: AppState) -> Router {
    app_with_routes(Router::new(), state)
}

/// API router merged with `extra` routes standing in for pages
pub fn app_with_routes(extra: Router, state: AppState) -> Router {
    let session = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);
    let routes = router::routes().with_state(state.clone()).merge(extra);

    router::with_middleware(routes, state, session)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Adds the session cookie returned by a previous response
pub fn with_cookie(mut request: Request<Body>, cookie: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert(COOKIE, cookie.parse().unwrap());
    request
}

/// `name=value` part of the response's session cookie
pub fn session_cookie(response: &Response<Body>) -> String {
    let header = response.headers()[SET_COOKIE].to_str().unwrap();

    header.split(';').next().unwrap().to_string()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
