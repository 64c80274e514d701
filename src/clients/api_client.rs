//! The [`ApiClient`] trait shared by every upstream client.
//!
//! A concrete client supplies its base URL, its [`HttpClient`] transport, and
//! the failure type it raises. Sending, URL resolution, header merging, and
//! failure conversion come from the trait's default methods.
//!
//! # Implementing a Client
//!
//! ```rust,ignore
//! use store_api::clients::{ApiClient, ApiError, HttpClient};
//!
//! struct InventoryClient {
//!     base_url: String,
//!     http_client: HttpClient,
//!     token: String,
//! }
//!
//! impl ApiClient for InventoryClient {
//!     type Error = ApiError;
//!
//!     fn base_url(&self) -> &str {
//!         &self.base_url
//!     }
//!
//!     fn http_client(&self) -> &HttpClient {
//!         &self.http_client
//!     }
//!
//!     fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
//!         builder.bearer_auth(&self.token)
//!     }
//! }
//! ```

use crate::clients::errors::{ApiFailure, TransportError};
use crate::clients::http_client::{apply_headers, HttpClient};
use crate::clients::http_request::{ApiRequest, HttpMethod};
use crate::clients::http_response::ApiResponse;
use crate::config::join_url;

/// An HTTP client bound to one upstream API.
///
/// # Request Preparation
///
/// [`send`](Self::send) prepares each request in this order:
///
/// 1. The transport's default headers
/// 2. The [`authorize`](Self::authorize) hook
/// 3. The request's own headers, replacing same-named entries
/// 4. The payload: the query map for `GET`, the JSON body for every other
///    verb. A `DELETE` with an empty body is sent without one.
///
/// # Failures
///
/// Every transport failure is converted into [`Self::Error`](Self::Error)
/// through [`ApiFailure::from_transport`]. Clients that want the underlying
/// failure unchanged use [`TransportError`] as their error type.
#[allow(async_fn_in_trait)]
pub trait ApiClient {
    /// The failure type this client raises.
    type Error: ApiFailure;

    /// Returns the base URL every request URI is joined onto.
    fn base_url(&self) -> &str;

    /// Returns the transport used to send requests.
    fn http_client(&self) -> &HttpClient;

    /// Adds authorization to an outgoing request.
    ///
    /// The default adds nothing.
    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
    }

    /// Resolves a request URI against the base URL.
    fn url_for(&self, uri: &str) -> String {
        join_url(self.base_url(), uri)
    }

    /// Starts a request with the default headers and authorization applied.
    fn base_request(&self, method: HttpMethod, url: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http_client().base_request(method, url))
    }

    /// Sends a request to the upstream API.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`](Self::Error) built from the request and the
    /// failure when the request cannot be sent or the upstream answers with a
    /// non-2xx status.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Self::Error> {
        tracing::debug!(
            method = request.method().name(),
            uri = %request.uri(),
            "Sending API request"
        );

        match self.dispatch(&request).await {
            Ok(response) => {
                tracing::debug!(
                    method = request.method().name(),
                    uri = %request.uri(),
                    code = response.code,
                    "API request succeeded"
                );
                Ok(response)
            }
            Err(failure) => {
                tracing::warn!(
                    method = request.method().name(),
                    uri = %request.uri(),
                    code = failure.code(),
                    error = %failure,
                    "API request failed"
                );
                Err(Self::Error::from_transport(request, failure))
            }
        }
    }

    /// Prepares and sends a request, returning the raw transport outcome.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure or a non-2xx status.
    async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request.uri());
        let method = request.method();
        let builder = apply_headers(self.base_request(method, &url), request.headers());

        let builder = match method {
            HttpMethod::Get if request.query().is_empty() => builder,
            HttpMethod::Get => builder.query(request.query()),
            HttpMethod::Delete if request.body().is_empty() => builder,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete => {
                builder.json(request.body())
            }
        };

        HttpClient::execute(builder).await
    }
}
