//! HTTP response types for the store API client.
//!
//! This module provides the [`ApiResponse`] type returned by a successful
//! [`ApiClient::send`](crate::clients::ApiClient::send), and attached to
//! failures caused by non-2xx responses.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A raw response from the upstream API.
///
/// The body is kept as text so that decoding failures surface to the caller
/// instead of being replaced by an empty value.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use store_api::clients::ApiResponse;
///
/// let response = ApiResponse::new(
///     422,
///     HashMap::new(),
///     r#"{"message":"Invalid","errors":{"title":["required"]}}"#,
/// );
///
/// assert!(!response.is_ok());
/// assert_eq!(response.json_key("message"), Some(serde_json::json!("Invalid")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub text: String,
}

impl ApiResponse {
    /// Creates a new `ApiResponse`.
    ///
    /// Header names are lowercased.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, text: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();

        Self {
            code,
            headers,
            text: text.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Parses the body as JSON.
    ///
    /// An empty body parses as `null`.
    ///
    /// # Errors
    ///
    /// Returns the parser error if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        if self.text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&self.text)
    }

    /// Returns a top-level field of a JSON object body.
    ///
    /// Returns `None` if the body is not a JSON object or has no such field.
    #[must_use]
    pub fn json_key(&self, key: &str) -> Option<Value> {
        match self.json() {
            Ok(Value::Object(mut map)) => map.remove(key),
            _ => None,
        }
    }

    /// Deserializes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error if the body is malformed or does not
    /// match the shape of `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.text)
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Collects reqwest response headers into a `HashMap`.
    pub(crate) fn collect_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = ApiResponse::new(code, HashMap::new(), "{}");
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 422, 429, 500, 503] {
            let response = ApiResponse::new(code, HashMap::new(), "{}");
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_json_parses_body() {
        let response = ApiResponse::new(200, HashMap::new(), r#"[{"id":1},{"id":2}]"#);
        assert_eq!(response.json().unwrap(), json!([{"id": 1}, {"id": 2}]));
    }

    #[test]
    fn test_empty_body_parses_as_null() {
        let response = ApiResponse::new(500, HashMap::new(), "");
        assert_eq!(response.json().unwrap(), Value::Null);
        assert!(response.json_key("errors").is_none());
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        let response = ApiResponse::new(200, HashMap::new(), "<html>oops</html>");
        assert!(response.json().is_err());
        assert!(response.json_key("errors").is_none());
    }

    #[test]
    fn test_json_key_extracts_field() {
        let response = ApiResponse::new(
            422,
            HashMap::new(),
            r#"{"errors":{"title":["The title field is required."]}}"#,
        );
        assert_eq!(
            response.json_key("errors"),
            Some(json!({"title": ["The title field is required."]}))
        );
        assert!(response.json_key("missing").is_none());
    }

    #[test]
    fn test_decode_into_typed_value() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Item {
            id: u64,
        }

        let response = ApiResponse::new(200, HashMap::new(), r#"{"id":9}"#);
        assert_eq!(response.decode::<Item>().unwrap(), Item { id: 9 });

        let response = ApiResponse::new(200, HashMap::new(), r#"{"id":"nine"}"#);
        assert!(response.decode::<Item>().is_err());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("X-Request-Id".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = ApiResponse::new(200, headers, "{}");
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
        assert_eq!(response.header("X-REQUEST-ID"), Some("abc-123-xyz"));
        assert!(response.header("content-type").is_none());
    }
}
