//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bucketlog_core::id::RandomIdGenerator;
use bucketlog_core::session::SessionFactory;
use bucketlog_store::InMemorySessionFactory;
use http_body_util::BodyExt;
use tower::ServiceExt;

use bucketlog_api::state::AppState;

/// Build the full app router over the given in-memory store with random
/// ids. Uses the same route structure as `main.rs`.
pub fn build_test_app(store: &InMemorySessionFactory) -> Router {
    build_test_app_with(Arc::new(store.clone()))
}

/// Build the full app router over an arbitrary session factory.
pub fn build_test_app_with(sessions: Arc<dyn SessionFactory>) -> Router {
    let app_state = AppState::new(sessions, Arc::new(RandomIdGenerator));
    bucketlog_api::app(app_state)
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
