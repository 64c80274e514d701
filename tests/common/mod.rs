//! Shared helpers for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use store_api::{ApiConfig, BaseUrl, StoreApiClient};
use wiremock::MockServer;

/// Returns a product as the upstream serializes it.
pub fn fake_product(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Product {id}"),
        "price": 10.5 + id as f64,
        "description": format!("Description of product {id}"),
        "category": "electronics",
        "image": format!("https://example.com/images/{id}.png"),
        "rating": {
            "rate": 4.2,
            "count": 100 + id
        }
    })
}

/// Builds a configuration pointing at the mock server.
pub fn mock_config(server: &MockServer) -> ApiConfig {
    ApiConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

/// Builds a store client pointing at the mock server.
pub fn store_client(server: &MockServer) -> StoreApiClient {
    StoreApiClient::new(&mock_config(server)).unwrap()
}
