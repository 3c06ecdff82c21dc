//! HTTP API integration tests
//!
//! Drives the full router with a fixture catalog through oneshot calls,
//! without going through the network stack.

use std::sync::Arc;

use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use yarnsy_server::api;
use yarnsy_server::catalog::{CatalogService, MemoryCatalog, Product};
use yarnsy_server::core::{Config, ServerState};
use yarnsy_server::services::{CartService, OrderService};

fn make_product(id: i64, name: &str, price: f64, category: &str, color: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        category: category.to_string(),
        color: color.to_string(),
        description: String::new(),
        image: String::new(),
        images: Vec::new(),
        popular: false,
        is_new: false,
        sale: false,
        in_stock: true,
        stock_quantity: 10,
    }
}

fn fixture_state() -> ServerState {
    let mut lavender = make_product(1, "Lavender Dream Top", 89.99, "tops", "Lavender");
    lavender.popular = true;
    let catalog = vec![
        lavender,
        make_product(2, "Sunset Blush Bag", 64.99, "bags", "Blush"),
        make_product(3, "Rose Garden Scarf", 45.99, "scarves", "Rose"),
        make_product(4, "Mint Fresh Top", 89.99, "tops", "Mint"),
    ];

    let config = Config {
        http_port: 0,
        catalog_backend: yarnsy_server::CatalogBackend::Memory,
        seed_path: String::new(),
        catalog_limit: 100,
        data_dir: "./data".to_string(),
        environment: "test".to_string(),
    };

    ServerState::new(
        config,
        CatalogService::new(Arc::new(MemoryCatalog::from_products(catalog))),
        CartService::new(),
        OrderService::with_sample_data(),
    )
}

async fn get(state: &ServerState, uri: &str) -> (StatusCode, Value) {
    let app = api::build_app().with_state(state.clone());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn send_json(
    state: &ServerState,
    method: &str,
    uri: &str,
    payload: Value,
) -> (StatusCode, Value) {
    let app = api::build_app().with_state(state.clone());
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_products_category_filter_with_catalog_wide_metadata() {
    let state = fixture_state();
    let (status, body) = get(&state, "/api/products?category=tops").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["products"].as_array().unwrap().len(), 2);
    // Metadata spans the whole catalog, not only the matches
    assert_eq!(body["filters"]["categories"], json!(["bags", "scarves", "tops"]));
    assert_eq!(body["filters"]["price_range"]["min"], 45.99);
    assert_eq!(body["filters"]["price_range"]["max"], 89.99);
}

#[tokio::test]
async fn test_products_inverted_price_range_is_empty_not_error() {
    let state = fixture_state();
    let (status, body) = get(&state, "/api/products?min_price=100&max_price=50").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_products_search_is_case_insensitive() {
    let state = fixture_state();
    let (_, upper) = get(&state, "/api/products?search=LAVENDER").await;
    let (_, lower) = get(&state, "/api/products?search=lavender").await;
    assert_eq!(upper["products"], lower["products"]);
    assert_eq!(upper["total"], 1);
}

#[tokio::test]
async fn test_products_sort_newest() {
    let state = fixture_state();
    let (_, body) = get(&state, "/api/products?sort=newest").await;
    let ids: Vec<i64> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 3, 2, 1]);
}

#[tokio::test]
async fn test_product_by_id_and_not_found() {
    let state = fixture_state();

    let (status, body) = get(&state, "/api/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Lavender Dream Top");
    // wire shape keeps the original field names
    assert_eq!(body["new"], false);

    let (status, body) = get(&state, "/api/products/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_product_details_related_share_category() {
    let state = fixture_state();
    let (status, body) = get(&state, "/api/products/1/details").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["id"], 1);
    let related = body["related"].as_array().unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["id"], 4);
}

#[tokio::test]
async fn test_recommendations_drawn_from_flagged_pool() {
    let state = fixture_state();
    let (status, body) = get(&state, "/api/recommendations").await;

    assert_eq!(status, StatusCode::OK);
    // only product 1 is flagged in the fixture
    let recs = body.as_array().unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["id"], 1);
}

#[tokio::test]
async fn test_non_numeric_price_bound_is_bad_request() {
    let state = fixture_state();
    let (status, _) = get(&state, "/api/products?min_price=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cart_roundtrip() {
    let state = fixture_state();

    let (status, body) = send_json(
        &state,
        "POST",
        "/api/cart",
        json!({"user_id": "alice", "product_id": 2, "quantity": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, cart) = get(&state, "/api/cart?user_id=alice").await;
    assert_eq!(cart["items"][0]["product_id"], 2);
    assert_eq!(cart["items"][0]["quantity"], 2);
    assert_eq!(cart["total"], 129.98);

    let (status, _) = send_json(
        &state,
        "DELETE",
        "/api/cart",
        json!({"user_id": "alice", "product_id": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, cart) = get(&state, "/api/cart?user_id=alice").await;
    assert_eq!(cart["items"][0]["quantity"], 1);
}

#[tokio::test]
async fn test_cart_add_unknown_product_is_404() {
    let state = fixture_state();
    let (status, _) = send_json(
        &state,
        "POST",
        "/api/cart",
        json!({"product_id": 999}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_orders_and_shipping() {
    let state = fixture_state();

    let (status, body) = get(&state, "/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["orderNumber"], "YS123456789");

    let (status, body) = get(&state, "/api/shipping?order_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["trackingNumber"], "TRACK123456");

    let (status, _) = get(&state, "/api/shipping?order_id=42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_index_and_health() {
    let state = fixture_state();

    let (status, body) = get(&state, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "online");

    let (status, body) = get(&state, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Yarnsy API");
}
