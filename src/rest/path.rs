//! Path tables for REST resources.
//!
//! A resource declares one [`ResourcePath`] per operation: the verb, the IDs
//! the path needs, and a template such as `/products/{id}`. [`get_path`]
//! picks the entry for an operation and [`build_path`] fills in the IDs.
//!
//! # Example
//!
//! ```rust
//! use store_api::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use store_api::clients::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/products"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Show, &["id"], "/products/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Show, &["id"]).unwrap();
//! assert_eq!(build_path(path.template, &[("id", 7)]), "/products/7");
//! ```

use std::fmt::Display;

use crate::clients::HttpMethod;

/// The operations a REST resource can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List every record (GET collection).
    List,
    /// Fetch one record by ID (GET member).
    Show,
    /// Create a record (POST collection).
    Create,
    /// Replace a record (PUT member).
    Update,
    /// Delete a record (DELETE member).
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Show => "show",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// One entry of a resource's path table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method to send with.
    pub http_method: HttpMethod,
    /// The operation this path serves.
    pub operation: ResourceOperation,
    /// The IDs the template needs, in template order.
    pub ids: &'static [&'static str],
    /// The path template, with `{name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a path table entry.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns `true` if every ID the template needs is available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Finds the path for an operation given the IDs at hand.
///
/// When several entries match, the one needing the most IDs wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.ids.len())
}

/// Replaces each `{name}` placeholder in a template with its value.
///
/// Values are URL-encoded. Placeholders without a value are left as is.
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &[(&str, V)]) -> String {
    ids.iter().fold(template.to_string(), |path, (key, value)| {
        path.replace(
            &format!("{{{key}}}"),
            &urlencoding::encode(&value.to_string()),
        )
    })
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
