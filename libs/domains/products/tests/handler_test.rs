//! Handler tests for Products domain
//!
//! These tests drive the products router with `oneshot()` over the
//! in-memory repository:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization and status codes
//! - Error bodies (`{"error": ...}`)

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    app_with(InMemoryProductRepository::new())
}

fn app_with(repository: InMemoryProductRepository) -> Router {
    handlers::router(ProductUseCases::new(Arc::new(repository)))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create(app: &Router, name: &str) -> ProductOutput {
    let response = app
        .clone()
        .oneshot(post_json(
            "/",
            json!({ "name": name, "price": 10.0, "quantity": 2 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let app = app();

    let product = create(&app, "Product 1").await;
    assert_eq!(product.name, "Product 1");
    assert_eq!(product.price, 10.0);
    assert_eq!(product.quantity, 2);
}

#[tokio::test]
async fn test_create_product_handler_validates_input() {
    let response = app()
        .oneshot(post_json(
            "/",
            json!({ "name": "", "price": 10.0, "quantity": 1 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Input data not provided or invalid");
}

#[tokio::test]
async fn test_create_product_handler_rejects_missing_body_fields() {
    let response = app()
        .oneshot(post_json("/", json!({ "name": "Product 1" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_name_returns_400() {
    let app = app();
    create(&app, "Product 1").await;

    let response = app
        .oneshot(post_json(
            "/",
            json!({ "name": "Product 1", "price": 5.0, "quantity": 1 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Name already used on another product." }));
}

#[tokio::test]
async fn test_get_product_handler() {
    let app = app();
    let created = create(&app, "Product 1").await;

    let response = app
        .oneshot(get(&format!("/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: ProductOutput = json_body(response.into_body()).await;
    assert_eq!(product, created);
}

#[tokio::test]
async fn test_get_product_handler_not_found_is_400() {
    let id = uuid::Uuid::now_v7();
    let response = app().oneshot(get(&format!("/{}", id))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], format!("Product not found using ID {}", id));
}

#[tokio::test]
async fn test_get_product_handler_invalid_uuid() {
    let response = app().oneshot(get("/not-a-uuid")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Invalid UUID: not-a-uuid");
}

#[tokio::test]
async fn test_update_product_handler() {
    let app = app();
    let created = create(&app, "Product 1").await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "name": "Renamed", "quantity": 7 })).unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: ProductOutput = json_body(response.into_body()).await;
    assert_eq!(product.name, "Renamed");
    assert_eq!(product.quantity, 7);
    assert_eq!(product.price, created.price);
    assert_eq!(product.created_at, created.created_at);
}

#[tokio::test]
async fn test_delete_product_handler() {
    let app = app();
    let created = create(&app, "Product 1").await;

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri(format!("/{}", created.id))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_products_handler() {
    let app = app();
    for name in ["a", "AA", "Aa", "b", "c"] {
        create(&app, name).await;
    }

    let response = app
        .oneshot(get("/?page=1&per_page=2&sort=name&sort_dir=asc&filter=a"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    let names: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["AA", "Aa"]);
    assert_eq!(body["total"], 3);
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["per_page"], 2);
    assert_eq!(body["last_page"], 2);
    assert_eq!(body["sort"], "name");
    assert_eq!(body["sort_dir"], "asc");
    assert_eq!(body["filter"], "a");
}

#[tokio::test]
async fn test_search_products_handler_defaults() {
    let app = app_with(InMemoryProductRepository::new());
    create(&app, "first").await;

    let response = app.oneshot(get("/?sort=fake&page=0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let result: SearchResult<ProductOutput> = json_body(response.into_body()).await;
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.current_page, 1);
    assert_eq!(result.per_page, 15);
    assert_eq!(result.last_page, 1);
    assert_eq!(result.sort, "created_at");
    assert_eq!(result.sort_dir, SortDirection::Desc);
    assert_eq!(result.filter, None);
}

#[tokio::test]
async fn test_search_products_handler_malformed_query_is_json_400() {
    let response = app().oneshot(get("/?page=abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["content-type"], "application/json");
    let body: Value = json_body(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("page"));
}

#[tokio::test]
async fn test_search_products_handler_empty_filter_not_echoed() {
    let app = app();
    create(&app, "first").await;

    let response = app.oneshot(get("/?filter=")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let result: SearchResult<ProductOutput> = json_body(response.into_body()).await;
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.filter, None);
}
