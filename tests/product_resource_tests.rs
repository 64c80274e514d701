//! Integration tests for the product resource.
//!
//! Each test mounts the upstream endpoint on a mock server and verifies both
//! the request the resource sends and the records it decodes.

mod common;

use common::{fake_product, mock_config, store_client};
use serde_json::json;
use store_api::rest::resources::{
    ListProductsData, ProductData, ProductResource, SaveProductData, SortDirection,
};
use store_api::rest::{ErrorPayload, ResourceError};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn save_data() -> SaveProductData {
    SaveProductData {
        title: "Mens Casual Slim Fit".to_string(),
        price: 15.99,
        description: "The color could be slightly different".to_string(),
        category: "men's clothing".to_string(),
        image: "https://example.com/images/slim-fit.png".to_string(),
    }
}

fn save_data_json() -> serde_json::Value {
    json!({
        "title": "Mens Casual Slim Fit",
        "price": 15.99,
        "description": "The color could be slightly different",
        "category": "men's clothing",
        "image": "https://example.com/images/slim-fit.png"
    })
}

fn product_with(id: u64, data: &SaveProductData) -> serde_json::Value {
    let mut product = serde_json::to_value(data).unwrap();
    product["id"] = json!(id);
    product
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_returns_products_in_order() {
    let server = MockServer::start().await;
    let products: Vec<_> = (1..=5).map(fake_product).collect();

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&products))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let listed = resource.list(None).await.unwrap();

    let ids: Vec<u64> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    for (product, source) in listed.iter().zip(&products) {
        assert_eq!(&serde_json::to_value(product).unwrap(), source);
    }
    assert_eq!(listed[4].rating.map(|r| r.count), Some(105));

    let received = server.received_requests().await.unwrap();
    assert!(received[0].url.query().is_none());
}

#[tokio::test]
async fn test_list_sends_filters_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("limit", "3"))
        .and(query_param("sort", "desc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([fake_product(3), fake_product(2), fake_product(1)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let params = ListProductsData {
        limit: Some(3),
        sort: Some(SortDirection::Desc),
    };
    let listed = resource.list(Some(params)).await.unwrap();

    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].id, 3);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query_pairs().count(), 2);
}

#[tokio::test]
async fn test_list_omits_unset_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("sort", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let params = ListProductsData {
        sort: Some(SortDirection::Asc),
        ..Default::default()
    };
    let listed = resource.list(Some(params)).await.unwrap();

    assert!(listed.is_empty());

    let received = server.received_requests().await.unwrap();
    let pairs: Vec<_> = received[0].url.query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![("sort".to_string(), "asc".to_string())]);
}

#[tokio::test]
async fn test_list_rejects_non_list_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fake_product(1)))
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let error = resource.list(None).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::Decode {
            resource: "Product",
            operation: "list",
            ..
        }
    ));
}

// ============================================================================
// Show Tests
// ============================================================================

#[tokio::test]
async fn test_show_returns_product() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fake_product(7)))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let product = resource.show(7).await.unwrap();

    let expected: ProductData = serde_json::from_value(fake_product(7)).unwrap();
    assert_eq!(product, expected);
}

#[tokio::test]
async fn test_show_missing_product_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/999"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let error = resource.show(999).await.unwrap_err();

    assert!(matches!(error, ResourceError::Api(_)));
    assert_eq!(error.code(), 404);
    assert_eq!(
        error.api_error().and_then(|e| e.context().uri),
        Some("/products/999".to_string())
    );
}

#[tokio::test]
async fn test_show_malformed_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": 1, \"title\":"))
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let error = resource.show(1).await.unwrap_err();

    assert!(matches!(error, ResourceError::Decode { operation: "show", .. }));
    assert_eq!(error.code(), 0);
}

#[tokio::test]
async fn test_show_empty_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let error = resource.show(1).await.unwrap_err();

    assert!(matches!(error, ResourceError::Decode { .. }));
}

// ============================================================================
// Create / Update Tests
// ============================================================================

#[tokio::test]
async fn test_create_sends_exact_payload() {
    let server = MockServer::start().await;
    let data = save_data();

    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_json(save_data_json()))
        .respond_with(ResponseTemplate::new(201).set_body_json(product_with(21, &data)))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let created = resource.create(&data).await.unwrap();

    assert_eq!(created.id, 21);
    assert_eq!(created.to_save_data(), data);
    assert!(created.rating.is_none());

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body.as_object().unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_validation_failure_renders_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": {"price": ["The price must be at least 0."]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let mut data = save_data();
    data.price = -1.0;
    let error = resource.create(&data).await.unwrap_err();

    let (status, payload) = ErrorPayload::from_resource_error(&error);

    assert_eq!(status, 422);
    assert_eq!(
        payload.errors,
        Some(json!({"price": ["The price must be at least 0."]}))
    );
    assert!(payload
        .message
        .starts_with("HTTP request returned status code 422"));
}

#[tokio::test]
async fn test_update_sends_exact_payload() {
    let server = MockServer::start().await;
    let data = save_data();

    Mock::given(method("PUT"))
        .and(path("/products/7"))
        .and(body_json(save_data_json()))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_with(7, &data)))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let updated = resource.update(7, &data).await.unwrap();

    assert_eq!(updated.id, 7);
    assert_eq!(updated.title, data.title);
    assert!((updated.price - data.price).abs() < f64::EPSILON);
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_returns_echoed_product() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/products/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fake_product(3)))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    let deleted = resource.delete(3).await.unwrap();

    assert_eq!(deleted.id, 3);
    assert_eq!(deleted.category, "electronics");
}

#[tokio::test]
async fn test_delete_sends_no_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fake_product(1)))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ProductResource::new(store_client(&server));
    resource.delete(1).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
    assert!(received[0].url.query().is_none());
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[tokio::test]
async fn test_shown_product_can_be_saved_back_unchanged() {
    let server = MockServer::start().await;
    let original = fake_product(11);
    let mut expected_body = original.clone();
    expected_body.as_object_mut().unwrap().remove("id");
    expected_body.as_object_mut().unwrap().remove("rating");

    Mock::given(method("GET"))
        .and(path("/products/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&original))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/products/11"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(&original))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ProductResource::from_config(&mock_config(&server)).unwrap();
    let product = resource.show(11).await.unwrap();
    let saved = resource
        .update(product.id, &product.to_save_data())
        .await
        .unwrap();

    assert_eq!(saved, product);
}
