//! Store API client implementation.

use crate::clients::api_client::ApiClient;
use crate::clients::http_client::HttpClient;
use crate::clients::store::StoreApiError;
use crate::config::{ApiConfig, BaseUrl};
use crate::error::ConfigError;

/// API client for the product store upstream.
///
/// Supplies the configured base URL and raises [`StoreApiError`] on failure.
/// Requests are unauthenticated.
///
/// # Thread Safety
///
/// `StoreApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use store_api::{ApiConfig, BaseUrl};
/// use store_api::clients::{ApiClient, StoreApiClient};
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://fakestoreapi.com/").unwrap())
///     .build()
///     .unwrap();
///
/// let client = StoreApiClient::new(&config).unwrap();
/// assert_eq!(client.base_url(), "https://fakestoreapi.com");
/// ```
#[derive(Clone, Debug)]
pub struct StoreApiClient {
    /// The upstream base URL.
    base_url: BaseUrl,
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify StoreApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreApiClient>();
};

impl StoreApiClient {
    /// Creates a new store client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP transport cannot
    /// be created.
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(config)?;

        tracing::debug!(base_url = %config.base_url(), "Created store API client");

        Ok(Self {
            base_url: config.base_url().clone(),
            http_client,
        })
    }
}

impl ApiClient for StoreApiClient {
    type Error = StoreApiError;

    fn base_url(&self) -> &str {
        self.base_url.as_ref()
    }

    fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}
