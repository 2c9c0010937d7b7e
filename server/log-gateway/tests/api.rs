//! Router-level tests for the gateway API.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use log_gateway::adapters::EventSource;
use log_gateway::{create_router, AppState};

fn app(mock_default: bool) -> axum::Router {
  create_router(Arc::new(AppState::new(EventSource::new(mock_default))))
}

async fn body_json(response: axum::response::Response) -> Value {
  let bytes = response.into_body().collect().await.unwrap().to_bytes();
  serde_json::from_slice(&bytes).unwrap()
}

fn post_query(payload: Value) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri("/query")
    .header("content-type", "application/json")
    .body(Body::from(payload.to_string()))
    .unwrap()
}

#[tokio::test]
async fn health_status_responds_ok() {
  let response = app(true)
    .oneshot(Request::builder().uri("/health_status").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn version_reports_mode() {
  let response = app(true)
    .oneshot(Request::builder().uri("/version").body(Body::empty()).unwrap())
    .await
    .unwrap();
  let body = body_json(response).await;
  assert_eq!(body["mode"], "mock");
  assert!(body["version"].is_string());
}

#[tokio::test]
async fn query_with_recipe_returns_summary() {
  let response = app(true)
    .oneshot(post_query(json!({ "prompt": "error_spikes", "mock": true })))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(response).await;
  assert_eq!(body["request_echo"]["resolved_recipe"], "error_spikes");
  assert_eq!(body["request_echo"]["mock"], true);
  assert_eq!(body["raw_events"].as_array().unwrap().len(), 5);
  let summary = body["summary"].as_str().unwrap();
  assert!(summary.contains("• Window size: 5 events"));
  assert!(summary.contains("InvalidToken"), "mock window is token-failure heavy");
}

#[tokio::test]
async fn query_mock_override_switches_dataset() {
  // Gateway configured realish; request forces mock.
  let response = app(false)
    .oneshot(post_query(json!({ "prompt": "error_spikes", "mock": true })))
    .await
    .unwrap();
  let body = body_json(response).await;
  assert_eq!(body["request_echo"]["mock"], true);
  assert!(body["summary"].as_str().unwrap().contains("InvalidToken"));

  // And with no override the realish dataset shows its own shape.
  let response = app(false)
    .oneshot(post_query(json!({ "prompt": "error_spikes" })))
    .await
    .unwrap();
  let body = body_json(response).await;
  assert_eq!(body["request_echo"]["mock"], false);
  assert!(body["summary"].as_str().unwrap().contains("Expired"));
}

#[tokio::test]
async fn overlong_prompt_is_rejected() {
  let long = "error ".repeat(60);
  let response = app(true).oneshot(post_query(json!({ "prompt": long }))).await.unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let body = body_json(response).await;
  assert!(body["detail"].as_str().unwrap().contains("Prompt too long"));
}

#[tokio::test]
async fn bad_time_range_is_rejected() {
  let response = app(true)
    .oneshot(post_query(json!({ "prompt": "error_spikes", "time_range": "2 hours" })))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let body = body_json(response).await;
  assert!(body["detail"].as_str().unwrap().contains("Invalid time_range"));
}

#[tokio::test]
async fn off_topic_prompt_is_rejected_by_guardrails() {
  let response = app(true)
    .oneshot(post_query(json!({ "prompt": "write a poem about my deployment" })))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let body = body_json(response).await;
  assert!(body["detail"].as_str().unwrap().starts_with("Guardrails:"));
}

#[tokio::test]
async fn recipes_are_listed_sorted() {
  let response = app(true)
    .oneshot(Request::builder().uri("/recipes").body(Body::empty()).unwrap())
    .await
    .unwrap();
  let body = body_json(response).await;
  assert_eq!(
    body["available_recipes"],
    json!(["error_spikes", "slow_queries", "traffic_summary"])
  );
}

#[tokio::test]
async fn run_recipe_by_name() {
  let response = app(true)
    .oneshot(
      Request::builder()
        .uri("/recipes/error_spikes?mock=true&time_range=1h")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body["request_echo"]["resolved_recipe"], "error_spikes");
  assert_eq!(body["request_echo"]["time_range"], "1h");
  assert!(body["summary"].as_str().unwrap().contains("• Next steps:"));
}

#[tokio::test]
async fn unknown_recipe_uses_fallback_prompt() {
  // Fallback text mentions the log group window; guardrails still pass
  // because it reads as a log-analysis instruction.
  let response = app(true)
    .oneshot(
      Request::builder()
        .uri("/recipes/unknown_recipe")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
}
