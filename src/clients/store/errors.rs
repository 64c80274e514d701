//! Failure type raised by the store API client.

use std::ops::Deref;

use thiserror::Error;

use crate::clients::errors::{ApiError, ApiFailure, TransportError};
use crate::clients::http_request::ApiRequest;

/// A failed request to the store API.
///
/// Behaves exactly like [`ApiError`], which it wraps and dereferences to. The
/// distinct type lets callers tell store failures apart from failures of
/// other upstreams.
///
/// # Example
///
/// ```rust
/// use store_api::clients::{ApiError, StoreApiError};
///
/// let error = StoreApiError::from(ApiError::new(None, None, None));
/// assert_eq!(error.code(), 0);
/// assert_eq!(error.to_string(), "An error occurred making an API request.");
/// ```
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StoreApiError(#[from] ApiError);

impl StoreApiError {
    /// Returns the wrapped [`ApiError`].
    #[must_use]
    pub const fn inner(&self) -> &ApiError {
        &self.0
    }

    /// Consumes the error, returning the wrapped [`ApiError`].
    #[must_use]
    pub fn into_inner(self) -> ApiError {
        self.0
    }
}

impl Deref for StoreApiError {
    type Target = ApiError;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ApiFailure for StoreApiError {
    fn from_transport(request: ApiRequest, failure: TransportError) -> Self {
        Self(ApiError::from_transport(request, failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::HttpResponseError;
    use crate::clients::http_response::ApiResponse;
    use std::collections::HashMap;

    #[test]
    fn test_from_transport_wraps_api_error() {
        let failure = TransportError::Status(HttpResponseError::from_response(ApiResponse::new(
            404,
            HashMap::new(),
            r#"{"message":"Not found"}"#,
        )));

        let error = StoreApiError::from_transport(ApiRequest::get("/products/99"), failure);

        assert_eq!(error.code(), 404);
        assert_eq!(error.context().uri.as_deref(), Some("/products/99"));
        assert_eq!(
            error.response().and_then(|r| r.json_key("message")),
            Some(serde_json::json!("Not found"))
        );
    }

    #[test]
    fn test_display_and_source_match_inner() {
        let error = StoreApiError::from(ApiError::new(None, None, None));
        let message = error.inner().message().to_string();

        assert_eq!(error.to_string(), message);
        assert!(std::error::Error::source(&error).is_none());
        assert_eq!(error.into_inner().code(), 0);
    }
}
