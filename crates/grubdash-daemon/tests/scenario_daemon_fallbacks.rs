//! Scenario: requests outside the orders contract
//!
//! - unknown paths answer 404 `{ error: "Path not found: ..." }`
//! - known paths with an unsupported method answer 405
//! - GET /health reports service identity and the order count

use std::sync::Arc;

use axum::http::{Request, StatusCode};
use grubdash_daemon::{routes, state};
use grubdash_testkit::{sample_orders, PENDING_ID};
use http_body_util::BodyExt;
use tower::ServiceExt; // oneshot

async fn call_json(method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let st = Arc::new(state::AppState::in_memory(sample_orders()));
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = routes::build_router(st)
        .oneshot(req)
        .await
        .expect("oneshot failed");
    let status = resp.status();
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    (
        status,
        serde_json::from_slice(&body).expect("body is not valid JSON"),
    )
}

#[tokio::test]
async fn unknown_path_is_404_with_path_in_message() {
    let (status, json) = call_json("GET", "/dishes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Path not found: /dishes");
}

#[tokio::test]
async fn unsupported_method_on_collection_is_405() {
    let (status, json) = call_json("DELETE", "/orders").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["error"], "DELETE not allowed for /orders");
}

#[tokio::test]
async fn unsupported_method_on_item_is_405() {
    let uri = format!("/orders/{PENDING_ID}");
    let (status, json) = call_json("POST", &uri).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["error"], format!("POST not allowed for {uri}"));
}

#[tokio::test]
async fn health_reports_service_and_order_count() {
    let (status, json) = call_json("GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
    assert_eq!(json["service"], "grubdash-daemon");
    assert_eq!(json["orders"], sample_orders().len());
}
