use axum::http::StatusCode;
use serde_json::json;
use wamumbi_test_utils::prelude::*;

use crate::util::setup::{app, body_json, get, post_json, send, session_cookie, with_cookie};

#[tokio::test]
/// Expect GET and POST on the dispatch path to reach the same handler
async fn dispatches_get_and_post() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let query = send(&app, get("/api/trpc/campaign.list")).await;
    assert_eq!(query.status(), StatusCode::OK);
    assert_eq!(
        body_json(query).await,
        json!({ "result": { "data": { "campaigns": [] } } })
    );

    let mutation = send(
        &app,
        post_json(
            "/api/trpc/campaign.create",
            json!({ "title": "Boreholes", "description": "Clean water", "goal_amount": 50_000 }),
        ),
    )
    .await;
    assert_eq!(mutation.status(), StatusCode::OK);

    let body = body_json(mutation).await;
    assert_eq!(body["result"]["data"]["title"], "Boreholes");
    assert_eq!(body["result"]["data"]["status"], "active");
    assert_eq!(body["result"]["data"]["raised_amount"], 0);

    Ok(())
}

#[tokio::test]
/// Expect 405 with an error envelope when a query is called with POST
async fn rejects_wrong_method() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, post_json("/api/trpc/campaign.list", json!({}))).await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], -32005);
    assert_eq!(body["error"]["data"]["code"], "METHOD_NOT_SUPPORTED");
    assert_eq!(body["error"]["data"]["httpStatus"], 405);
    assert_eq!(body["error"]["data"]["path"], "campaign.list");

    Ok(())
}

#[tokio::test]
async fn returns_not_found_for_unknown_procedure() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = send(&app, get("/api/trpc/campaign.archive")).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["data"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["data"]["path"], "campaign.archive");

    Ok(())
}

#[tokio::test]
/// Expect malformed JSON input to be a parse error and mismatched input a bad request
async fn rejects_invalid_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let malformed = send(&app, get("/api/trpc/campaign.byId?input=%7B%22id%22")).await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(malformed).await["error"]["data"]["code"], "PARSE_ERROR");

    let mismatched = send(
        &app,
        post_json("/api/trpc/campaign.create", json!({ "title": "Boreholes" })),
    )
    .await;
    assert_eq!(mismatched.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(mismatched).await["error"]["data"]["code"], "BAD_REQUEST");

    Ok(())
}

#[tokio::test]
/// Expect query input to be read from the `input` query parameter
async fn reads_query_input() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_campaign("Boreholes", 10_000)
        .build()
        .await?;
    let app = app(&test);
    let campaign_id = test.campaigns[0].id;

    let found = send(
        &app,
        get(&format!("/api/trpc/campaign.byId?input=%7B%22id%22%3A{}%7D", campaign_id)),
    )
    .await;
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(body_json(found).await["result"]["data"]["id"], campaign_id);

    let missing = send(&app, get("/api/trpc/campaign.byId?input=%7B%22id%22%3A999%7D")).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect donations to count towards the campaign's raised amount
async fn donation_updates_campaign_total() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_campaign("Boreholes", 10_000)
        .build()
        .await?;
    let app = app(&test);
    let campaign_id = test.campaigns[0].id;

    let resp = send(
        &app,
        post_json(
            "/api/trpc/donation.create",
            json!({ "campaign_id": campaign_id, "amount": 2_500, "donor_name": "Wanjiru" }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["result"]["data"]["user_id"], json!(null));

    let campaign = send(
        &app,
        get(&format!("/api/trpc/campaign.byId?input=%7B%22id%22%3A{}%7D", campaign_id)),
    )
    .await;
    assert_eq!(body_json(campaign).await["result"]["data"]["raised_amount"], 2_500);

    let donations = send(&app, get("/api/trpc/donation.list")).await;
    assert_eq!(
        body_json(donations).await["result"]["data"]["donations"]
            .as_array()
            .map(Vec::len),
        Some(1)
    );

    Ok(())
}

#[tokio::test]
/// Expect concurrent donations to all count towards the raised amount
async fn concurrent_donations_sum_into_total() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_campaign("Boreholes", 10_000)
        .build()
        .await?;
    let app = app(&test);
    let campaign_id = test.campaigns[0].id;

    let amounts = [100, 200, 300, 400, 500];
    let responses = futures::future::join_all(amounts.iter().map(|amount| {
        send(
            &app,
            post_json(
                "/api/trpc/donation.create",
                json!({ "campaign_id": campaign_id, "amount": amount }),
            ),
        )
    }))
    .await;
    assert!(responses.iter().all(|resp| resp.status() == StatusCode::OK));

    let campaign = send(
        &app,
        get(&format!("/api/trpc/campaign.byId?input=%7B%22id%22%3A{}%7D", campaign_id)),
    )
    .await;
    assert_eq!(body_json(campaign).await["result"]["data"]["raised_amount"], 1_500);

    Ok(())
}

#[tokio::test]
/// Expect an amount above the maximum to be a bad request that leaves the total alone
async fn rejects_oversized_donation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_campaign("Boreholes", 10_000)
        .build()
        .await?;
    let app = app(&test);
    let campaign_id = test.campaigns[0].id;

    let resp = send(
        &app,
        post_json(
            "/api/trpc/donation.create",
            json!({ "campaign_id": campaign_id, "amount": i64::MAX }),
        ),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["data"]["code"], "BAD_REQUEST");
    assert_eq!(body["error"]["data"]["path"], "donation.create");

    let campaign = send(
        &app,
        get(&format!("/api/trpc/campaign.byId?input=%7B%22id%22%3A{}%7D", campaign_id)),
    )
    .await;
    assert_eq!(body_json(campaign).await["result"]["data"]["raised_amount"], 0);

    Ok(())
}

#[tokio::test]
/// Expect 409 when deleting a campaign that already received donations
async fn refuses_to_delete_campaign_with_donations() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_campaign("Boreholes", 10_000)
        .build()
        .await?;
    let campaign = test.campaigns[0].clone();
    test.campaign().insert_donation(campaign.clone(), 500).await?;
    let app = app(&test);

    let resp = send(
        &app,
        post_json("/api/trpc/campaign.delete", json!({ "id": campaign.id })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(resp).await["error"]["data"]["code"], "CONFLICT");

    Ok(())
}

#[tokio::test]
/// Expect signing in to issue a new session ID and retire the one presented
async fn sync_renews_session_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);
    let input = json!({ "auth_id": "user_2abc", "email": "amina@example.org", "name": "Amina" });

    let first = send(&app, post_json("/api/trpc/user.sync", input.clone())).await;
    let first_cookie = session_cookie(&first);

    let second = send(
        &app,
        with_cookie(post_json("/api/trpc/user.sync", input), &first_cookie),
    )
    .await;
    assert_eq!(second.status(), StatusCode::OK);
    let second_cookie = session_cookie(&second);
    assert_ne!(first_cookie, second_cookie);

    let stale = send(&app, with_cookie(get("/api/trpc/user.me"), &first_cookie)).await;
    assert_eq!(stale.status(), StatusCode::UNAUTHORIZED);

    let me = send(&app, with_cookie(get("/api/trpc/user.me"), &second_cookie)).await;
    assert_eq!(me.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect user.me to require a session user and succeed after user.sync
async fn syncs_user_into_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let anonymous = send(&app, get("/api/trpc/user.me")).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(anonymous).await["error"]["data"]["code"], "UNAUTHORIZED");

    let synced = send(
        &app,
        post_json(
            "/api/trpc/user.sync",
            json!({ "auth_id": "user_2abc", "email": "amina@example.org", "name": "Amina" }),
        ),
    )
    .await;
    assert_eq!(synced.status(), StatusCode::OK);
    let cookie = session_cookie(&synced);

    let me = send(&app, with_cookie(get("/api/trpc/user.me"), &cookie)).await;
    assert_eq!(me.status(), StatusCode::OK);
    assert_eq!(body_json(me).await["result"]["data"]["auth_id"], "user_2abc");

    let signed_out = send(
        &app,
        with_cookie(post_json("/api/trpc/user.signOut", json!({})), &cookie),
    )
    .await;
    assert_eq!(
        body_json(signed_out).await["result"]["data"]["signed_out"],
        true
    );

    Ok(())
}
