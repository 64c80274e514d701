//! HTTP client types for upstream REST APIs.
//!
//! This module provides the client layer: a request descriptor, a shared
//! [`ApiClient`] trait that sends it, and the failure types a send can raise.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiRequest`]: A request to be sent to the API
//! - [`ApiResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`ApiClient`]: The trait every upstream client implements
//! - [`HttpClient`]: The async HTTP transport shared by clients
//! - [`ApiError`]: The typed failure raised by clients
//! - [`TransportError`]: The underlying network or status failure
//! - [`store::StoreApiClient`]: Client for the product store upstream
//! - [`store::StoreApiError`]: Failure type of the store client
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
//! let client = StoreApiClient::new(&config)?;
//!
//! let request = ApiRequest::get("/products").set_query("limit", "5");
//! let response = client.send(request).await?;
//! ```
//!
//! # Payload Rules
//!
//! - **GET**: the query map is sent as the query string; the body is ignored
//! - **POST, PUT, DELETE**: the body map is sent as JSON; the query map, if
//!   any, is already part of [`ApiRequest::uri`]

mod api_client;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod store;

pub use api_client::ApiClient;
pub use errors::{
    ApiError, ApiFailure, ErrorContext, HttpResponseError, TransportError, DEFAULT_ERROR_MESSAGE,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{encode_query, ApiRequest, HttpMethod};
pub use http_response::ApiResponse;

// Re-export store client types at the clients module level
pub use store::{StoreApiClient, StoreApiError};
