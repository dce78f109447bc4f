use axum::http::{header::CACHE_CONTROL, StatusCode};
use serde_json::{json, Value};
use wamumbi::server::{
    error::rpc::RpcError,
    model::app::AppState,
    rpc::{app_router, Procedure, ProcedureKind},
};
use wamumbi_test_utils::prelude::*;

use crate::util::setup::{app, app_with_state, body_json, get, send};

#[tokio::test]
/// Expect a generated document with one path per procedure
async fn serves_generated_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = send(&app, get("/api/openapi")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[CACHE_CONTROL], "no-store");

    let document = body_json(resp).await;
    assert!(document["openapi"].as_str().unwrap().starts_with("3.1"));
    let paths = document["paths"].as_object().unwrap();
    assert!(!paths.is_empty());
    assert!(paths.contains_key("/api/trpc/campaign.list"));
    assert!(paths.contains_key("/api/trpc/donation.create"));
    assert!(paths.contains_key("/api/trpc/user.me"));

    Ok(())
}

#[tokio::test]
/// Expect exactly the fallback document with 200 OK when a procedure has no schema
async fn serves_fallback_when_generation_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let rpc = app_router().procedure(Procedure::new(
        "campaign.export",
        ProcedureKind::Query,
        |_, _| async { Ok::<_, RpcError>(Value::Null) },
    ));
    let app = app_with_state(test.state::<AppState>().with_rpc(rpc));

    let resp = send(&app, get("/api/openapi")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "openapi": "3.0.3",
            "info": {
                "title": "Wamumbi Charity Management API",
                "version": "1.0.0",
                "description": "API documentation for Wamumbi Charity Management System"
            },
            "paths": {},
            "components": {}
        })
    );

    Ok(())
}

#[tokio::test]
/// Expect the documentation generator to be built on the first request only
async fn initializes_generator_lazily() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.state::<AppState>();
    let app = app_with_state(state.clone());

    assert!(!state.docs_initialized());

    let resp = send(&app, get("/api/openapi")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(state.docs_initialized());

    Ok(())
}
