//! HTTP request types for the store API client.
//!
//! This module provides [`HttpMethod`] and [`ApiRequest`], the request
//! descriptor that resources build and clients send.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HTTP methods supported by the client.
///
/// The method selects the transport verb and whether the request's query map
/// or body map is sent: `Get` sends the query, every other verb sends the body.
/// `Delete` omits the body when it is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    #[default]
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the lowercase form of the verb (e.g., `"get"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }

    /// Returns the uppercase wire name of the verb (e.g., `"GET"`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A request descriptor to be sent through an [`ApiClient`](crate::clients::ApiClient).
///
/// The method and URI are fixed at construction; headers, query parameters,
/// and body fields are set through chaining setters. Each setter comes in two
/// shapes: `set_*` merges a single key (overwriting an existing value) and
/// `replace_*` swaps the whole map.
///
/// Requests are moved into [`ApiClient::send`](crate::clients::ApiClient::send),
/// so a request is never reused across calls. No validation is performed.
///
/// # Example
///
/// ```rust
/// use store_api::clients::{ApiRequest, HttpMethod};
/// use serde_json::json;
///
/// let request = ApiRequest::post("/products")
///     .set_header("X-Trace", "abc")
///     .set_query("dry_run", "1")
///     .set_body("title", "Backpack")
///     .set_body("price", json!(109.95));
///
/// assert_eq!(request.method(), HttpMethod::Post);
/// assert_eq!(request.uri(), "/products?dry_run=1");
/// assert_eq!(request.body()["price"], json!(109.95));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiRequest {
    method: HttpMethod,
    uri: String,
    headers: IndexMap<String, String>,
    query: IndexMap<String, String>,
    body: Map<String, Value>,
}

impl ApiRequest {
    /// Creates a request for the given method and URI with empty headers,
    /// query, and body.
    #[must_use]
    pub fn new(method: HttpMethod, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            ..Self::default()
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(uri: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, uri)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(uri: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, uri)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(uri: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, uri)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(uri: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, uri)
    }

    /// Sets a single header, keeping the others.
    #[must_use]
    pub fn set_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Replaces every header with the given map.
    #[must_use]
    pub fn replace_headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = headers
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Removes a single header.
    #[must_use]
    pub fn clear_header(mut self, key: &str) -> Self {
        self.headers.shift_remove(key);
        self
    }

    /// Removes every header.
    #[must_use]
    pub fn clear_headers(mut self) -> Self {
        self.headers.clear();
        self
    }

    /// Sets a single query parameter, keeping the others.
    #[must_use]
    pub fn set_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Replaces every query parameter with the given map.
    #[must_use]
    pub fn replace_query<K, V>(mut self, query: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query = query
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Removes a single query parameter.
    #[must_use]
    pub fn clear_query_param(mut self, key: &str) -> Self {
        self.query.shift_remove(key);
        self
    }

    /// Removes every query parameter.
    #[must_use]
    pub fn clear_query(mut self) -> Self {
        self.query.clear();
        self
    }

    /// Sets a single body field, keeping the others.
    #[must_use]
    pub fn set_body(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(key.into(), value.into());
        self
    }

    /// Replaces the whole body with the given map.
    #[must_use]
    pub fn replace_body(mut self, body: Map<String, Value>) -> Self {
        self.body = body;
        self
    }

    /// Removes a single body field.
    #[must_use]
    pub fn clear_body_field(mut self, key: &str) -> Self {
        self.body.remove(key);
        self
    }

    /// Removes every body field.
    #[must_use]
    pub fn clear_body(mut self) -> Self {
        self.body.clear();
        self
    }

    /// Returns the request headers.
    #[must_use]
    pub const fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn query(&self) -> &IndexMap<String, String> {
        &self.query
    }

    /// Returns the body fields.
    #[must_use]
    pub const fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the URI exactly as given at construction.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.uri
    }

    /// Returns the URI to send.
    ///
    /// GET requests and requests without query parameters return the URI
    /// unchanged: a GET carries its query separately so the transport can
    /// merge it. Every other request gets `?` and the URL-encoded query
    /// appended.
    #[must_use]
    pub fn uri(&self) -> String {
        if self.query.is_empty() || self.method == HttpMethod::Get {
            return self.uri.clone();
        }

        format!("{}?{}", self.uri, encode_query(&self.query))
    }
}

/// URL-encodes a query map as `key=value` pairs joined by `&`.
///
/// Pairs keep the map's insertion order.
///
/// # Example
///
/// ```rust
/// use indexmap::IndexMap;
/// use store_api::clients::encode_query;
///
/// let mut query = IndexMap::new();
/// query.insert("q".to_string(), "red shoes".to_string());
/// query.insert("sort".to_string(), "desc".to_string());
///
/// assert_eq!(encode_query(&query), "q=red%20shoes&sort=desc");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn encode_query(query: &IndexMap<String, String>) -> String {
    query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
