//! In-process tests for the checkout endpoint.
//!
//! The router is driven through `tower::ServiceExt::oneshot`, no socket is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use comic_storefront::api::{build_router, AppState};
use comic_storefront::domain::model::{
    CARD_WITHOUT_AUTHORIZATION, CARD_WITHOUT_FUNDS, INVALID_ADDRESS, VALID_CARD,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn call(req: Request<Body>) -> (StatusCode, Value) {
    let router = build_router(Arc::new(AppState::new()));
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_checkout(body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/checkout")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    call(req).await
}

#[tokio::test]
async fn test_valid_order_returns_200_with_data() {
    let order = json!({
        "personalData": { "direccion": {} },
        "paymentData": { "number": VALID_CARD }
    });

    let (status, body) = post_checkout(order.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], order);
}

#[tokio::test]
async fn test_non_post_returns_405() {
    for method in ["GET", "PUT", "DELETE"] {
        let req = Request::builder()
            .method(method)
            .uri("/api/checkout")
            .body(Body::empty())
            .unwrap();

        let (status, body) = call(req).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "method {}", method);
        assert_eq!(body["error"], "ERROR_METHOD_NOT_ALLOWED");
    }
}

#[tokio::test]
async fn test_405_advertises_post() {
    let router = build_router(Arc::new(AppState::new()));
    let req = Request::builder()
        .method("GET")
        .uri("/api/checkout")
        .body(Body::empty())
        .unwrap();

    let resp = router.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.headers()[header::ALLOW], "POST");
}

#[tokio::test]
async fn test_invalid_address_returns_400() {
    let (status, body) = post_checkout(json!({
        "personalData": { "direccion": { "calle": INVALID_ADDRESS } }
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ERROR_INCORRECT_ADDRESS");
}

#[tokio::test]
async fn test_empty_form_returns_500() {
    let (status, body) = post_checkout(json!({})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "ERROR_SERVER");
}

#[tokio::test]
async fn test_empty_body_returns_500() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/checkout")
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(req).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "ERROR_SERVER");
}

#[tokio::test]
async fn test_card_without_funds_returns_400() {
    let (status, body) = post_checkout(json!({
        "personalData": { "direccion": {} },
        "paymentData": { "number": CARD_WITHOUT_FUNDS }
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ERROR_CARD_WITHOUT_FUNDS");
}

#[tokio::test]
async fn test_card_without_authorization_returns_400() {
    let (status, body) = post_checkout(json!({
        "personalData": { "direccion": {} },
        "paymentData": { "number": CARD_WITHOUT_AUTHORIZATION }
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ERROR_CARD_WITHOUT_AUTHORIZATION");
}

#[tokio::test]
async fn test_ungrouped_card_without_funds_returns_400() {
    let (status, body) = post_checkout(json!({
        "personalData": { "direccion": {} },
        "paymentData": { "number": "4111411141114111" }
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ERROR_CARD_WITHOUT_FUNDS");
}

#[tokio::test]
async fn test_address_under_both_keys_returns_200() {
    let order = json!({
        "personalData": { "direccion": {}, "address": {} },
        "paymentData": { "number": VALID_CARD }
    });

    let (status, body) = post_checkout(order.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], order);
}

#[tokio::test]
async fn test_card_with_invalid_data_returns_400() {
    let (status, body) = post_checkout(json!({
        "personalData": { "direccion": {} },
        "paymentData": { "number": "4111" }
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ERROR_CARD_DATA_INCORRECT");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_health_returns_service_name() {
    let req = Request::builder()
        .method("GET")
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "comic-storefront");
}
