//! HTTP-level integration tests for projects, moderation, membership and
//! role endpoints.

mod common;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use common::{
    body_bytes, body_json, create_user, delete_auth, delete_json_auth, get, get_auth,
    make_admin, make_superadmin, patch_json_auth, post_auth, post_json_auth, post_multipart,
    token_for,
};
use forum_core::validation::MAX_THUMBNAIL_BYTES;
use serde_json::json;
use sqlx::PgPool;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-data";

/// Submit a project over HTTP and return the response JSON.
async fn submit(app: axum::Router, token: &str, name: &str) -> serde_json::Value {
    let response = post_multipart(
        app,
        "/api/v1/projects",
        Some(token),
        &[
            ("name", name.as_bytes()),
            ("description", b"built over http".as_slice()),
            ("thumbnail", PNG_BYTES),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_lifecycle_over_http(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    make_admin(&pool, bob).await;
    let (alice_token, bob_token) = (token_for(alice), token_for(bob));
    let app = common::build_test_app(pool);

    // Alice submits; it waits for review.
    let json = submit(app.clone(), &alice_token, "X").await;
    assert_eq!(json["data"]["outcome"], "pending");
    assert_eq!(json["data"]["has_thumbnail"], true);
    let r_id = json["data"]["r_id"].as_i64().unwrap();

    let queue = body_json(get_auth(app.clone(), "/api/v1/submissions", &bob_token).await).await;
    assert_eq!(queue["data"].as_array().unwrap().len(), 1);

    // Bob approves.
    let response = post_auth(
        app.clone(),
        &format!("/api/v1/submissions/{r_id}/approve"),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let project = body_json(response).await;
    let p_id = project["data"]["p_id"].as_i64().unwrap();
    assert_eq!(project["data"]["status"], "in_progress");

    let ongoing = body_json(get(app.clone(), "/api/v1/projects?status=ongoing").await).await;
    assert_eq!(ongoing["data"][0]["p_id"], p_id);
    assert_eq!(ongoing["data"][0]["creator_name"], "alice");

    // Thumbnail is served raw.
    let response = get(app.clone(), &format!("/api/v1/projects/{p_id}/thumbnail")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/png");
    assert_eq!(body_bytes(response).await, PNG_BYTES);

    // Bob deletes; the tombstone shows up in both deleted listings.
    let response = delete_auth(app.clone(), &format!("/api/v1/projects/{p_id}"), &bob_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app.clone(), &format!("/api/v1/projects/{p_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let all = body_json(get(app.clone(), "/api/v1/deleted").await).await;
    assert_eq!(all["data"][0]["p_id"], p_id);
    let mine = body_json(get_auth(app, "/api/v1/deleted/mine", &alice_token).await).await;
    assert_eq!(mine["data"][0]["name"], "X");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submit_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_multipart(
        app,
        "/api/v1/projects",
        None,
        &[("name", b"Anon".as_slice())],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHENTICATED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_oversized_thumbnail_is_rejected(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let app = common::build_test_app(pool);
    let big = vec![7u8; MAX_THUMBNAIL_BYTES + 1];

    let response = post_multipart(
        app,
        "/api/v1/projects",
        Some(&token_for(alice)),
        &[("name", b"Huge".as_slice()), ("thumbnail", big.as_slice())],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_submission_is_published(pool: PgPool) {
    let root = create_user(&pool, "root").await;
    make_superadmin(&pool, root).await;
    let token = token_for(root);
    let app = common::build_test_app(pool);

    let json = submit(app.clone(), &token, "Direct").await;
    assert_eq!(json["data"]["outcome"], "published");

    let response = post_multipart(
        app,
        "/api/v1/projects/direct",
        Some(&token),
        &[("name", b"Also direct".as_slice())],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["has_thumbnail"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_moderation_endpoints_are_admin_only(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let token = token_for(alice);
    let app = common::build_test_app(pool);

    let json = submit(app.clone(), &token, "Self-serve").await;
    let r_id = json["data"]["r_id"].as_i64().unwrap();

    let response = get_auth(app.clone(), "/api/v1/submissions", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "PERMISSION_DENIED");

    let response = post_auth(
        app.clone(),
        &format!("/api/v1/submissions/{r_id}/approve"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let mine = body_json(get_auth(app, "/api/v1/submissions/mine", &token).await).await;
    assert_eq!(mine["data"][0]["status"], "pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_endpoint_validates_and_authorizes(pool: PgPool) {
    let root = create_user(&pool, "root").await;
    let dave = create_user(&pool, "dave").await;
    make_superadmin(&pool, root).await;
    let (root_token, dave_token) = (token_for(root), token_for(dave));
    let app = common::build_test_app(pool);

    let json = submit(app.clone(), &root_token, "Statused").await;
    let p_id = json["data"]["p_id"].as_i64().unwrap();
    let uri = format!("/api/v1/projects/{p_id}/status");

    let response =
        patch_json_auth(app.clone(), &uri, &root_token, json!({ "status": "archived" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response =
        patch_json_auth(app.clone(), &uri, &dave_token, json!({ "status": "completed" })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response =
        patch_json_auth(app.clone(), &uri, &root_token, json!({ "status": "completed" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let past = body_json(get(app.clone(), "/api/v1/projects?status=past").await).await;
    assert_eq!(past["data"][0]["p_id"], p_id);
    let upcoming = body_json(get(app.clone(), "/api/v1/projects?status=upcoming").await).await;
    assert!(upcoming["data"].as_array().unwrap().is_empty());

    let response = get(app, "/api/v1/projects?status=archived").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_membership_endpoints(pool: PgPool) {
    let root = create_user(&pool, "root").await;
    let dave = create_user(&pool, "dave").await;
    make_superadmin(&pool, root).await;
    let token = token_for(root);
    let app = common::build_test_app(pool);

    let json = submit(app.clone(), &token, "Staffed").await;
    let p_id = json["data"]["p_id"].as_i64().unwrap();
    let uri = format!("/api/v1/projects/{p_id}/maintainers");

    let body = json!({ "user_id": dave, "name": "Dave M." });
    let response = post_json_auth(app.clone(), &uri, &token, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(app.clone(), &uri, &token, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "ALREADY_EXISTS");

    let listed = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"][0]["name"], "Dave M.");

    let response = delete_auth(app.clone(), &format!("{uri}/{dave}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete_auth(app.clone(), &format!("{uri}/{dave}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let contributors = format!("/api/v1/projects/{p_id}/contributors");
    let response =
        post_json_auth(app.clone(), &contributors, &token, json!({ "user_id": dave })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["name"], "Dave M.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_endpoints(pool: PgPool) {
    let root = create_user(&pool, "root").await;
    let erin = create_user(&pool, "erin").await;
    make_superadmin(&pool, root).await;
    let (root_token, erin_token) = (token_for(root), token_for(erin));
    let app = common::build_test_app(pool);

    let body = json!({ "user_id": erin, "name": "Erin" });
    let response =
        post_json_auth(app.clone(), "/api/v1/roles/admin", &erin_token, body.clone()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(app.clone(), "/api/v1/roles/admin", &root_token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let change = body_json(response).await;
    assert_eq!(change["data"]["role"], "admin");
    assert_eq!(change["data"]["granted"], true);

    let me = body_json(get_auth(app.clone(), "/api/v1/auth/me", &erin_token).await).await;
    assert_eq!(me["data"]["is_admin"], true);

    let response = delete_json_auth(
        app.clone(),
        "/api/v1/roles/admin",
        &root_token,
        json!({ "user_id": erin }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json_auth(
        app,
        "/api/v1/roles/superadmin",
        &root_token,
        json!({ "user_id": 999_999 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_requests_are_invalid_request(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let token = token_for(alice);
    let app = common::build_test_app(pool);

    // Identifier that does not parse.
    let response = delete_auth(app.clone(), "/api/v1/projects/abc", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REQUEST");

    let response = post_auth(app.clone(), "/api/v1/submissions/x1/approve", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REQUEST");

    // Body missing a required field.
    let response =
        patch_json_auth(app.clone(), "/api/v1/projects/5/status", &token, json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("status"));

    let response = post_json_auth(
        app.clone(),
        "/api/v1/projects/5/maintainers",
        &token,
        json!({ "user_id": "bob" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REQUEST");

    // Submission that is not multipart.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/projects",
        &token,
        json!({ "name": "X", "description": "d" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REQUEST");

    // Repeated query key.
    let response = get(app, "/api/v1/projects?status=all&status=past").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REQUEST");
}
