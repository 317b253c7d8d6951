//! Shared helpers for API integration tests.
//!
//! Builds the application router against a test event catalog and provides
//! small request helpers that stamp the gateway identity header.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use courier_api::config::ServerConfig;
use courier_api::middleware::auth::USER_ID_HEADER;
use courier_api::routes;
use courier_api::state::AppState;
use courier_core::availability::CatalogAvailability;
use courier_core::catalog::EventCatalog;

/// The catalog all integration tests run against.
pub fn test_catalog() -> EventCatalog {
    EventCatalog::from_json(
        r#"{
            "channels": ["web", "email", "push"],
            "events": [
                {"key": "like", "template": "%(actor)s liked %(object)s"},
                {"key": "moved", "template": "%(object)s was moved to %(target)s"},
                {"key": "release", "template": "New feature released"},
                {"key": "digest_ready", "template": "Your weekly digest is ready", "channels": ["email"]}
            ]
        }"#,
    )
    .expect("test catalog should be valid")
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        catalog_path: None,
    }
}

/// Build the application router with the given database pool.
///
/// Mirrors the router construction in `main.rs` minus the outer middleware
/// layers, so tests exercise the same routes and state that production
/// uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let catalog = Arc::new(test_catalog());

    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        catalog: Arc::clone(&catalog),
        availability: Arc::new(CatalogAvailability::new(catalog)),
    };

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .with_state(state)
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should not fail")
}

/// GET with the gateway identity header.
pub async fn get(app: Router, user_id: i64, uri: &str) -> Response {
    send(
        app,
        Request::builder()
            .uri(uri)
            .header(USER_ID_HEADER, user_id.to_string())
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// GET without any identity header.
pub async fn get_anonymous(app: Router, uri: &str) -> Response {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

/// POST with an empty body and the gateway identity header.
pub async fn post(app: Router, user_id: i64, uri: &str) -> Response {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(USER_ID_HEADER, user_id.to_string())
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// POST a JSON body with the gateway identity header.
pub async fn post_json(app: Router, user_id: i64, uri: &str, body: serde_json::Value) -> Response {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(USER_ID_HEADER, user_id.to_string())
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// PUT a JSON body with the gateway identity header.
pub async fn put_json(app: Router, user_id: i64, uri: &str, body: serde_json::Value) -> Response {
    send(
        app,
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(USER_ID_HEADER, user_id.to_string())
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
