//! # Store API Rust Client
//!
//! A typed async client for proxying product operations to an upstream REST
//! store API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - A chainable request descriptor, [`ApiRequest`]
//! - The [`ApiClient`] trait, shared by every upstream client, with a
//!   compile-time choice of failure type
//! - [`StoreApiClient`], the client for the product store
//! - [`ProductResource`], mapping list/show/create/update/delete onto requests
//!   and decoding responses into typed records
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use store_api::{ApiConfig, BaseUrl, ProductResource};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://fakestoreapi.com").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! let products = ProductResource::from_config(&config).unwrap();
//! ```
//!
//! ## Working with Products
//!
//! ```rust,ignore
//! use store_api::{ListProductsData, ProductResource, SaveProductData, SortDirection};
//!
//! let products = ProductResource::from_config(&config)?;
//!
//! let latest = products
//!     .list(Some(ListProductsData {
//!         limit: Some(5),
//!         sort: Some(SortDirection::Desc),
//!     }))
//!     .await?;
//!
//! let mut data = latest[0].to_save_data();
//! data.price = 19.99;
//! let updated = products.update(latest[0].id, &data).await?;
//! ```
//!
//! ## Sending Raw Requests
//!
//! ```rust,ignore
//! use store_api::{ApiClient, ApiRequest, StoreApiClient};
//!
//! let client = StoreApiClient::new(&config)?;
//!
//! let request = ApiRequest::get("/products/categories").set_header("X-Trace", "abc");
//! let response = client.send(request).await?;
//! println!("{}", response.text);
//! ```
//!
//! ## Handling Failures
//!
//! ```rust,ignore
//! use store_api::{ErrorPayload, ResourceError};
//!
//! match products.create(&data).await {
//!     Ok(product) => println!("Created {}", product.id),
//!     Err(ResourceError::Api(error)) if error.code() == 422 => {
//!         println!("Invalid: {:?}", error.validation_errors());
//!     }
//!     Err(error) => {
//!         let (status, payload) = ErrorPayload::from_resource_error(&error);
//!         println!("{status}: {}", payload.message);
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Thread-safe**: All clients are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No silent decoding**: Malformed responses surface as errors

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiConfig, ApiConfigBuilder, BaseUrl};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiClient, ApiError, ApiFailure, ApiRequest, ApiResponse, HttpClient, HttpMethod,
    StoreApiClient, StoreApiError, TransportError,
};

// Re-export resource types
pub use rest::resources::{
    ListProductsData, ProductData, ProductResource, RatingData, SaveProductData, SortDirection,
};
pub use rest::{ErrorPayload, ResourceError};
