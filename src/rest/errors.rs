//! Resource-specific error types for REST API operations.
//!
//! # Error Handling
//!
//! A resource operation fails in one of three ways:
//!
//! - [`ResourceError::Api`]: the request failed (network error or non-2xx status)
//! - [`ResourceError::Decode`]: the upstream answered 2xx but the body was
//!   malformed or had an unexpected shape
//! - [`ResourceError::Encode`]: the write record could not be turned into a
//!   JSON object body
//!
//! # Example
//!
//! ```rust,ignore
//! use store_api::rest::ResourceError;
//!
//! match products.show(99).await {
//!     Ok(product) => println!("Found: {}", product.title),
//!     Err(ResourceError::Api(e)) if e.code() == 404 => println!("No such product"),
//!     Err(ResourceError::Decode { source, .. }) => println!("Bad payload: {source}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{ApiError, StoreApiError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use store_api::rest::ResourceError;
///
/// let error = ResourceError::PathResolutionFailed {
///     resource: "Product",
///     operation: "show",
/// };
/// assert_eq!(error.to_string(), "Cannot resolve path for Product::show");
/// assert_eq!(error.code(), 0);
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The request to the upstream failed.
    #[error(transparent)]
    Api(#[from] StoreApiError),

    /// The response body could not be decoded into the expected record.
    #[error("Failed to decode {resource}::{operation} response: {source}")]
    Decode {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being performed.
        operation: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The write record could not be encoded as a JSON object.
    #[error("Failed to encode {resource} payload: {reason}")]
    Encode {
        /// The type name of the resource.
        resource: &'static str,
        /// Why encoding failed.
        reason: String,
    },

    /// No path in the resource's table serves the operation.
    #[error("Cannot resolve path for {resource}::{operation}")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "show", "delete").
        operation: &'static str,
    },
}

impl ResourceError {
    /// Returns the underlying [`ApiError`] when the request itself failed.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error.inner()),
            _ => None,
        }
    }

    /// Returns the HTTP status code of a failed request, or 0.
    #[must_use]
    pub fn code(&self) -> u16 {
        self.api_error().map_or(0, ApiError::code)
    }
}
