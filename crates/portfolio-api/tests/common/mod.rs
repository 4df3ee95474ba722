//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use portfolio_content::domain::catalog::ContentCatalog;
use tower::ServiceExt;

use portfolio_api::state::AppState;

/// Build the full app router over the embedded content, exactly as
/// `main.rs` does.
pub fn build_test_app() -> Router {
    build_test_app_with(ContentCatalog::embedded().unwrap())
}

/// Build the full app router over a custom catalog.
pub fn build_test_app_with(catalog: ContentCatalog) -> Router {
    portfolio_api::app(AppState::new(Arc::new(catalog)))
}

/// Send a request and return status, headers and raw body bytes.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, body_bytes.to_vec())
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let (status, _, body_bytes) = send(app, request).await;
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body_bytes) = get_raw(app, uri).await;
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return status, headers and raw body.
pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}
