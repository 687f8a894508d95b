// tests/common/mod.rs
// Helpers shared between the integration tests

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use hyper::body::Bytes;
use serde_json::Value;
use tower::util::ServiceExt;

/// Sends a single request through a fresh copy of the application router
pub async fn send(request: Request<Body>) -> Response<Body> {
    qiskit_api::app::router()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

pub async fn get(uri: &str) -> Response<Body> {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn body_bytes(body: Body) -> Bytes {
    body.collect().await.unwrap().to_bytes()
}

pub async fn parse_response_body(body: Body) -> Value {
    serde_json::from_slice(&body_bytes(body).await).unwrap()
}
