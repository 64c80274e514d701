//! Failure types for the store API client.
//!
//! # Error Handling
//!
//! A failed send is described at two levels:
//!
//! - [`TransportError`]: the underlying failure, either a network error with
//!   no response or a non-2xx [`HttpResponseError`] carrying the response
//! - [`ApiError`]: the typed failure a client raises, wrapping the request,
//!   the response (if any), and the underlying [`TransportError`]
//!
//! Which of these a client raises is chosen by its
//! [`ApiClient::Error`](crate::clients::ApiClient::Error) associated type,
//! through the [`ApiFailure`] construction contract. [`TransportError`]
//! implements the contract as the identity, so a client configured with it
//! re-raises the original failure unwrapped.
//!
//! # Example
//!
//! ```rust,ignore
//! use store_api::clients::{ApiClient, ApiRequest};
//!
//! match client.send(ApiRequest::get("/products/1")).await {
//!     Ok(response) => println!("Product: {}", response.text),
//!     Err(error) if error.code() == 404 => println!("No such product"),
//!     Err(error) => println!("{} ({:?})", error, error.context()),
//! }
//! ```

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::clients::http_request::{ApiRequest, HttpMethod};
use crate::clients::http_response::ApiResponse;

/// Message used by [`ApiError`] when no underlying cause supplies one.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred making an API request.";

/// Longest response body excerpt included in a status failure message.
const BODY_EXCERPT_LIMIT: usize = 200;

/// Error returned when the upstream answers with a non-2xx status.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use store_api::clients::{ApiResponse, HttpResponseError};
///
/// let error = HttpResponseError::from_response(ApiResponse::new(404, HashMap::new(), ""));
///
/// assert_eq!(error.code, 404);
/// assert_eq!(error.to_string(), "HTTP request returned status code 404");
/// ```
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable description including a body excerpt.
    pub message: String,
    /// The full response.
    pub response: ApiResponse,
}

impl HttpResponseError {
    /// Builds the error for a non-2xx response.
    #[must_use]
    pub fn from_response(response: ApiResponse) -> Self {
        let code = response.code;
        let body = response.text.trim();

        let message = if body.is_empty() {
            format!("HTTP request returned status code {code}")
        } else if body.chars().count() > BODY_EXCERPT_LIMIT {
            let excerpt: String = body.chars().take(BODY_EXCERPT_LIMIT).collect();
            format!("HTTP request returned status code {code}: {excerpt} (truncated...)")
        } else {
            format!("HTTP request returned status code {code}: {body}")
        };

        Self {
            code,
            message,
            response,
        }
    }
}

/// The underlying failure of a send.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The upstream answered with a non-2xx status.
    #[error(transparent)]
    Status(#[from] HttpResponseError),

    /// Network, connection, or request-building error. No response exists.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl TransportError {
    /// Returns the HTTP status code of the failure, or 0 when there is none.
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Self::Status(error) => error.code,
            Self::Network(error) => error.status().map_or(0, |status| status.as_u16()),
        }
    }

    /// Returns the response that caused the failure, if there was one.
    #[must_use]
    pub const fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::Status(error) => Some(&error.response),
            Self::Network(_) => None,
        }
    }
}

/// Construction contract for the failure type a client raises.
///
/// [`ApiClient::send`](crate::clients::ApiClient::send) converts every
/// transport failure through this trait.
pub trait ApiFailure: std::error::Error + Send + Sync + Sized + 'static {
    /// Builds the failure from the request that was sent and what went wrong.
    fn from_transport(request: ApiRequest, failure: TransportError) -> Self;
}

impl ApiFailure for TransportError {
    fn from_transport(_request: ApiRequest, failure: TransportError) -> Self {
        failure
    }
}

/// Logging context for an [`ApiError`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ErrorContext {
    /// The URI of the failed request, as it was sent.
    pub uri: Option<String>,
    /// The HTTP method of the failed request.
    pub method: Option<HttpMethod>,
}

/// A failed API request.
///
/// Carries the originating request, the upstream response, and the
/// underlying cause, each optional. The message comes from the cause, falling
/// back to [`DEFAULT_ERROR_MESSAGE`]; the code is the cause's HTTP status,
/// or 0.
///
/// # Example
///
/// ```rust
/// use store_api::clients::{ApiError, ApiRequest, DEFAULT_ERROR_MESSAGE};
///
/// let error = ApiError::new(None, None, None);
/// assert_eq!(error.message(), DEFAULT_ERROR_MESSAGE);
/// assert_eq!(error.code(), 0);
///
/// let error = ApiError::new(Some(ApiRequest::get("/products")), None, None);
/// assert_eq!(error.context().uri.as_deref(), Some("/products"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    request: Option<ApiRequest>,
    response: Option<ApiResponse>,
    #[source]
    cause: Option<TransportError>,
    message: String,
    code: u16,
}

impl ApiError {
    /// Creates a new `ApiError`.
    #[must_use]
    pub fn new(
        request: Option<ApiRequest>,
        response: Option<ApiResponse>,
        cause: Option<TransportError>,
    ) -> Self {
        let message = cause
            .as_ref()
            .map(ToString::to_string)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
        let code = cause.as_ref().map_or(0, TransportError::code);

        Self {
            request,
            response,
            cause,
            message,
            code,
        }
    }

    /// Returns the request that failed, if captured.
    #[must_use]
    pub const fn request(&self) -> Option<&ApiRequest> {
        self.request.as_ref()
    }

    /// Returns the upstream response, if one was received.
    #[must_use]
    pub const fn response(&self) -> Option<&ApiResponse> {
        self.response.as_ref()
    }

    /// Returns the underlying failure, if any.
    #[must_use]
    pub const fn cause(&self) -> Option<&TransportError> {
        self.cause.as_ref()
    }

    /// Consumes the error, returning the underlying failure.
    #[must_use]
    pub fn into_cause(self) -> Option<TransportError> {
        self.cause
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status code, or 0 if there was no response.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Returns the `errors` field of the response body, if present.
    ///
    /// Upstreams typically report field-level validation problems there
    /// alongside a 422 status.
    #[must_use]
    pub fn validation_errors(&self) -> Option<Value> {
        self.response.as_ref()?.json_key("errors")
    }

    /// Returns the URI and method of the failed request for logging.
    #[must_use]
    pub fn context(&self) -> ErrorContext {
        ErrorContext {
            uri: self.request.as_ref().map(ApiRequest::uri),
            method: self.request.as_ref().map(ApiRequest::method),
        }
    }
}

impl ApiFailure for ApiError {
    fn from_transport(request: ApiRequest, failure: TransportError) -> Self {
        let response = failure.response().cloned();
        Self::new(Some(request), response, Some(failure))
    }
}
