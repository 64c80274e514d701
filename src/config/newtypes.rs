//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated base URL for an upstream API.
///
/// The base URL is the root address prefixed to every relative request path.
/// It must use the `http` or `https` scheme and carry a host. A trailing `/`
/// is trimmed so that joining with request paths yields exactly one separator.
///
/// # Example
///
/// ```rust
/// use store_api::BaseUrl;
///
/// let url = BaseUrl::new("https://store.example.com/api/").unwrap();
/// assert_eq!(url.as_ref(), "https://store.example.com/api");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "store.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let url = raw.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: raw.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        // Query strings and fragments cannot be joined with request paths.
        if remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a request URI onto this base URL.
    ///
    /// Exactly one `/` separates the base from the URI, whatever slashes
    /// either side carries. An empty URI yields the base URL itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use store_api::BaseUrl;
    ///
    /// let base = BaseUrl::new("https://store.example.com/").unwrap();
    /// assert_eq!(base.join("/products"), "https://store.example.com/products");
    /// assert_eq!(base.join("products/1"), "https://store.example.com/products/1");
    /// ```
    #[must_use]
    pub fn join(&self, uri: &str) -> String {
        join_url(&self.url, uri)
    }
}

/// Joins a base URL and a relative URI with a single `/`.
pub(crate) fn join_url(base: &str, uri: &str) -> String {
    let base = base.trim_end_matches('/');
    let uri = uri.trim_start_matches('/');
    if uri.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{uri}")
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
