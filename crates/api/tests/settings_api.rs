//! HTTP-level integration tests for the `/notifications/settings` endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, get_anonymous, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET settings renders the default form for a fresh user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_settings_renders_default_form(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, 1, "/api/v1/notifications/settings").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let form = &json["data"]["form"];

    let channel_fields = form["channel_fields"].as_array().unwrap();
    assert_eq!(channel_fields.len(), 3);
    assert_eq!(channel_fields[0]["name"], "web");
    assert_eq!(channel_fields[1]["label"], "E-mail");
    assert!(
        channel_fields.iter().all(|f| f["initial"] == true),
        "a fresh user has every master toggle enabled"
    );

    let rows = form["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["event"], "like");
    assert_eq!(rows[0]["label"], "liked");
    assert_eq!(rows[2]["label"], "New feature released");
}

// ---------------------------------------------------------------------------
// Test: restricted events only render toggles for their channels
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_restricted_event_limits_row_fields(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, 1, "/api/v1/notifications/settings").await;
    let json = body_json(response).await;

    let rows = json["data"]["form"]["rows"].as_array().unwrap();
    let digest_row = rows
        .iter()
        .find(|row| row["event"] == "digest_ready")
        .expect("digest_ready row should exist");

    let fields = digest_row["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["name"], "email_digest_ready");
}

// ---------------------------------------------------------------------------
// Test: PUT settings persists the submission and feeds later form renders
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_settings_round_trips_into_form(pool: PgPool) {
    let app = build_test_app(pool);

    let response = put_json(
        app.clone(),
        1,
        "/api/v1/notifications/settings",
        json!({"web": false, "web_like": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let settings = &json["data"];
    assert_eq!(settings["channels"]["web"], false);
    assert_eq!(settings["events"]["web"]["like"], false);
    // Absent fields default to enabled, including combinations never offered.
    assert_eq!(settings["channels"]["email"], true);
    assert_eq!(settings["events"]["web"]["digest_ready"], true);

    let response = get(app, 1, "/api/v1/notifications/settings").await;
    let json = body_json(response).await;
    let form = &json["data"]["form"];

    let web_master = form["channel_fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "web")
        .unwrap();
    assert_eq!(web_master["initial"], false);

    let like_row = form["rows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["event"] == "like")
        .unwrap();
    let web_like = like_row["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "web_like")
        .unwrap();
    assert_eq!(web_like["initial"], false);
}

// ---------------------------------------------------------------------------
// Test: settings are per-user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_settings_are_scoped_per_user(pool: PgPool) {
    let app = build_test_app(pool);

    put_json(
        app.clone(),
        1,
        "/api/v1/notifications/settings",
        json!({"email": false}),
    )
    .await;

    let response = get(app, 2, "/api/v1/notifications/settings").await;
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["settings"]["channels"].as_object().map(|o| o.len()),
        Some(0),
        "another user's settings stay untouched"
    );
}

// ---------------------------------------------------------------------------
// Test: missing identity header is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_identity_is_unauthorized(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get_anonymous(app, "/api/v1/notifications/settings").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Test: non-boolean submission values are rejected by deserialization
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_boolean_submission_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json(
        app,
        1,
        "/api/v1/notifications/settings",
        json!({"web": "yes please"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
