//! HTTP tests for the schema stage.
//!
//! The app runs over a pool that cannot connect. Shape errors must be
//! answered with 400 before any database access; inputs the schemas accept
//! (zero ids, empty strings) must get past the schema and fail only when
//! the handler reaches the database.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_with_headers, post_json, put_json};
use serde_json::json;

fn app() -> axum::Router {
    common::build_test_app(common::unreachable_pool())
}

async fn assert_validation_error(response: axum::response::Response, field: &str) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], field);
}

// ---------------------------------------------------------------------------
// Rejected by the schema
// ---------------------------------------------------------------------------

#[tokio::test]
async fn item_without_title_is_400() {
    let response = post_json(app(), "/api/v1/items", json!({"type": "step"})).await;
    assert_validation_error(response, "title").await;
}

#[tokio::test]
async fn item_with_numeric_title_is_400() {
    let response = post_json(app(), "/api/v1/items", json!({"title": 5})).await;
    assert_validation_error(response, "title").await;
}

#[tokio::test]
async fn item_with_fractional_parent_id_is_400() {
    let response = post_json(
        app(),
        "/api/v1/items",
        json!({"title": "x", "parent_id": 1.5}),
    )
    .await;
    assert_validation_error(response, "parent_id").await;
}

#[tokio::test]
async fn item_update_with_array_description_is_400() {
    let response = put_json(app(), "/api/v1/items/1", json!({"description": ["a"]})).await;
    assert_validation_error(response, "description").await;
}

#[tokio::test]
async fn learner_without_email_is_400() {
    let response = post_json(app(), "/api/v1/learners", json!({"name": "Ann"})).await;
    assert_validation_error(response, "email").await;
}

#[tokio::test]
async fn interaction_with_string_learner_id_is_400() {
    let response = post_json(
        app(),
        "/api/v1/interactions",
        json!({"learner_id": "1", "item_id": 1, "kind": "attempt"}),
    )
    .await;
    assert_validation_error(response, "learner_id").await;
}

#[tokio::test]
async fn non_object_body_is_rejected_by_extractor() {
    let response = post_json(app(), "/api/v1/items", json!(["title"])).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Accepted by the schema, so the request reaches the (unreachable) database
// ---------------------------------------------------------------------------

#[tokio::test]
async fn zero_learner_id_passes_schema() {
    let response = post_json(
        app(),
        "/api/v1/interactions",
        json!({"learner_id": 0, "item_id": 1, "kind": "attempt"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn empty_title_and_zero_parent_pass_schema() {
    let response = post_json(
        app(),
        "/api/v1/items",
        json!({"title": "", "parent_id": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn empty_update_passes_schema() {
    let response = put_json(app(), "/api/v1/items/1", json!({})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ---------------------------------------------------------------------------
// General HTTP behaviour
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let response = get(app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-request-id").is_some());

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(app(), "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn client_request_id_is_echoed() {
    let response = get_with_headers(app(), "/health", &[("x-request-id", "trace-42")]).await;
    assert_eq!(response.headers()["x-request-id"], "trace-42");
}

#[tokio::test]
async fn allowed_origin_can_read_request_id() {
    let response =
        get_with_headers(app(), "/health", &[("origin", "http://localhost:5173")]).await;
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:5173");
    let exposed = headers["access-control-expose-headers"].to_str().unwrap();
    assert!(exposed.contains("x-request-id"));
}
