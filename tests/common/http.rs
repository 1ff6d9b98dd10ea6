//! In-process HTTP helpers: drive the router with `tower::ServiceExt::oneshot`
//! and decode the JSON envelope.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use college_core::Catalog;
use college_info::{app, Config};
use serde_json::Value;
use tower::ServiceExt;

/// Router over `catalog` with the built-in default limits.
pub fn test_app(catalog: Catalog) -> Router {
    app(catalog, &Config::defaults())
}

/// Issue a `GET` and return the status plus the parsed JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request must build");
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body must be readable");
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("{uri}: body is not JSON ({e}): {bytes:?}"));
    (status, body)
}
