//! Shared helpers for API integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use geleza_api::config::ServerConfig;
use geleza_api::router::build_app_router;
use geleza_api::state::AppState;
use geleza_events::EmailDelivery;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3001` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. No mailer is configured, so
/// booking creation takes the email-skipped path.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(pool, None)
}

/// Like [`build_test_app`], but with the given mailer wired into the app
/// state so booking creation attempts a real delivery.
pub fn build_test_app_with_mailer(pool: PgPool, mailer: EmailDelivery) -> Router {
    build_app(pool, Some(Arc::new(mailer)))
}

fn build_app(pool: PgPool, mailer: Option<Arc<EmailDelivery>>) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer,
    };

    build_app_router(state, &config)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request with a JSON body and return the raw response.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request to the app and return the raw response.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a JSON body and return the parsed JSON response, asserting 201.
pub async fn create_resource(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let response = send_json(app, Method::POST, uri, body).await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "expected 201 creating resource at {uri}"
    );
    body_json(response).await
}
