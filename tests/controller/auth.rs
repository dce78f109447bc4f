use axum::{
    body::to_bytes,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use wamumbi::server::controller::auth::login;
use wamumbi_test_utils::prelude::*;

use crate::util::setup::{app, get, send};

#[tokio::test]
/// Expect 307 temporary redirect to the sign-in page with an empty body
async fn login_redirects_to_sign_in() {
    let resp = login().await.into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/sign-in");

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
/// Expect the redirect regardless of query string or session state
async fn login_route_always_redirects() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    for uri in ["/login", "/login?next=/donate"] {
        let resp = send(&app, get(uri)).await;

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers()[LOCATION], "/sign-in");
    }

    Ok(())
}
