//! Client for the product store upstream.
//!
//! This module provides [`StoreApiClient`], the [`ApiClient`](crate::clients::ApiClient)
//! bound to the store API, and [`StoreApiError`], the failure type it raises.
//!
//! # Example
//!
//! ```rust,ignore
//! use store_api::{ApiConfig, BaseUrl};
//! use store_api::clients::{ApiClient, ApiRequest, StoreApiClient};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://fakestoreapi.com")?)
//!     .build()?;
//!
//! let client = StoreApiClient::new(&config)?;
//! let response = client.send(ApiRequest::get("/products/1")).await?;
//! println!("Product: {}", response.text);
//! ```

mod client;
mod errors;

pub use client::StoreApiClient;
pub use errors::StoreApiError;
