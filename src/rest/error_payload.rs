//! JSON error payload for the layer that serves API failures to its own callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::ApiError;
use crate::rest::ResourceError;

/// Status used when a failure carries no valid HTTP status.
const FALLBACK_STATUS: u16 = 500;

/// A failure rendered as `{"message": ..., "errors": ...}`.
///
/// `errors` holds the upstream's field-level validation errors and is only
/// filled for 422 responses.
///
/// # Example
///
/// ```rust
/// use store_api::clients::ApiError;
/// use store_api::rest::ErrorPayload;
///
/// let (status, payload) = ErrorPayload::from_api_error(&ApiError::new(None, None, None));
///
/// assert_eq!(status, 500);
/// assert_eq!(
///     serde_json::to_value(&payload).unwrap(),
///     serde_json::json!({"message": "An error occurred making an API request.", "errors": null})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// The failure message.
    pub message: String,
    /// Upstream validation errors, for 422 failures.
    pub errors: Option<Value>,
}

impl ErrorPayload {
    /// Renders an API failure, returning the HTTP status to respond with.
    ///
    /// The status is the failure's code when it is a valid HTTP status, and
    /// 500 otherwise.
    #[must_use]
    pub fn from_api_error(error: &ApiError) -> (u16, Self) {
        let code = error.code();
        let errors = if code == 422 {
            error.validation_errors()
        } else {
            None
        };

        let status = if (100..=599).contains(&code) {
            code
        } else {
            FALLBACK_STATUS
        };

        (
            status,
            Self {
                message: error.message().to_string(),
                errors,
            },
        )
    }

    /// Renders a resource failure, returning the HTTP status to respond with.
    ///
    /// Failures that never reached the upstream, or whose response could not
    /// be decoded, are reported as 500.
    #[must_use]
    pub fn from_resource_error(error: &ResourceError) -> (u16, Self) {
        error.api_error().map_or_else(
            || {
                (
                    FALLBACK_STATUS,
                    Self {
                        message: error.to_string(),
                        errors: None,
                    },
                )
            },
            Self::from_api_error,
        )
    }
}
