//! Request validation tests for the customer endpoints.
//!
//! Every case here is rejected (or short-circuited) before any database
//! work happens, so the tests run against a lazy pool that never
//! connects: a query attempt would surface as a 500, failing the
//! assertions below.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use rolodex_api::{create_router, AppState};
use rolodex_core::Storage;
use serde_json::Value;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let pool = sqlx::PgPool::connect_lazy("postgresql://localhost/rolodex_test")
        .expect("lazy pool construction cannot fail");
    let state = AppState { storage: Storage::new(pool), profile: "development".to_string() };

    create_router(state, Duration::from_secs(30))
}

async fn error_code(response: axum::response::Response) -> String {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body: Value = serde_json::from_slice(&body_bytes).expect("error body should be JSON");

    body["error"]["code"].as_str().expect("error body should carry a code").to_string()
}

fn post_customers(body: Body) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/customers")
        .header("content-type", "application/json")
        .body(body)
        .unwrap()
}

#[tokio::test]
async fn create_with_missing_body_is_rejected() {
    let app = test_app();

    let response = app.oneshot(post_customers(Body::empty())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await, "null_payload");
}

#[tokio::test]
async fn create_without_content_type_is_rejected() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/customers")
        .body(Body::from(r#"{"firstName":"John","lastName":"Doe"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await, "null_payload");
}

#[tokio::test]
async fn create_with_malformed_json_is_rejected() {
    let app = test_app();

    let response =
        app.oneshot(post_customers(Body::from(r#"{"firstName": "#))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await, "null_payload");
}

#[tokio::test]
async fn create_with_blank_first_name_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(post_customers(Body::from(r#"{"firstName":"   ","lastName":"Doe"}"#)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await, "invalid_first_name");
}

#[tokio::test]
async fn create_with_missing_last_name_is_rejected() {
    let app = test_app();

    let response =
        app.oneshot(post_customers(Body::from(r#"{"firstName":"John"}"#))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await, "invalid_last_name");
}

#[tokio::test]
async fn create_with_only_forbidden_characters_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(post_customers(Body::from(
            r#"{"firstName":"<>\"'%;()&+","lastName":"Doe"}"#,
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(response).await, "invalid_first_name");
}

#[tokio::test]
async fn search_without_name_returns_empty_list() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/customers/search")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn search_with_whitespace_name_returns_empty_list() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/customers/search?name=%20%20")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn search_with_only_forbidden_characters_returns_empty_list() {
    let app = test_app();

    // ';' and '+' are deleted by sanitization, leaving nothing to match.
    let request = Request::builder()
        .method("GET")
        .uri("/api/customers/search?name=%3B%2B")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn non_integer_id_in_path_is_rejected() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/customers/not-a-number")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
