//! HTTP transport for the store API client.
//!
//! This module provides the [`HttpClient`] type, a thin wrapper around
//! `reqwest` that owns the connection pool, the default headers, and the
//! per-request timeout shared by every request a client sends.

use std::time::Duration;

use indexmap::IndexMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::clients::errors::{HttpResponseError, TransportError};
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::ApiResponse;
use crate::config::ApiConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport used by API clients.
///
/// Every request starts with these default headers:
///
/// - `User-Agent`: `"{prefix} | Store API Library v{version} | Rust {rust_version}"`
/// - `Accept`: `application/json`
/// - `Content-Type`: `application/json`
///
/// Headers set later on the request replace same-named defaults.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use store_api::{ApiConfig, BaseUrl};
/// use store_api::clients::HttpClient;
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://fakestoreapi.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert!(client.default_headers()["User-Agent"].starts_with("MyApp/1.0 | "));
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: IndexMap<String, String>,
    /// Per-request timeout, if configured.
    timeout: Option<Duration>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Store API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = IndexMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClientBuild {
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            default_headers,
            timeout: config.timeout(),
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &IndexMap<String, String> {
        &self.default_headers
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Starts a request carrying the default headers.
    #[must_use]
    pub fn base_request(&self, method: HttpMethod, url: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method.into(), url);
        apply_headers(builder, &self.default_headers)
    }

    /// Sends a prepared request and reads the full response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the request cannot be built or
    /// sent, or the body cannot be read, and [`TransportError::Status`] for a
    /// non-2xx response.
    pub async fn execute(builder: reqwest::RequestBuilder) -> Result<ApiResponse, TransportError> {
        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = ApiResponse::collect_headers(res.headers());
        let text = res.text().await?;

        let response = ApiResponse::new(code, headers, text);
        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpResponseError::from_response(response).into())
    }
}

/// Applies headers to a request, replacing same-named headers already set.
///
/// A header whose name or value is not valid HTTP is handed to reqwest
/// unchanged so that the send fails with reqwest's builder error.
pub(crate) fn apply_headers(
    builder: reqwest::RequestBuilder,
    headers: &IndexMap<String, String>,
) -> reqwest::RequestBuilder {
    let mut map = HeaderMap::new();
    let mut invalid = Vec::new();

    for (key, value) in headers {
        match (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                map.insert(name, value);
            }
            _ => invalid.push((key.as_str(), value.as_str())),
        }
    }

    invalid
        .into_iter()
        .fold(builder.headers(map), |builder, (key, value)| {
            builder.header(key, value)
        })
}
