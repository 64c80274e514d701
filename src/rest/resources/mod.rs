//! REST resource implementations.
//!
//! # Available Resources
//!
//! ## Product Resource
//!
//! Products are the goods the store sells.
//!
//! ```rust,ignore
//! use store_api::rest::resources::{ListProductsData, ProductResource, SortDirection};
//!
//! let products = ProductResource::from_config(&config)?;
//!
//! // Fetch a single product
//! let product = products.show(1).await?;
//!
//! // List products, newest first
//! let params = ListProductsData {
//!     sort: Some(SortDirection::Desc),
//!     ..Default::default()
//! };
//! let all = products.list(Some(params)).await?;
//! ```

mod product;

pub use product::{
    ListProductsData, ProductData, ProductResource, RatingData, SaveProductData, SortDirection,
};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::rest::ResourceError;

/// Serializes a parameter struct into query parameters.
///
/// Null fields are dropped. Every other field must be a scalar.
fn serialize_to_query<T: Serialize>(
    resource: &'static str,
    params: &T,
) -> Result<IndexMap<String, String>, ResourceError> {
    let map = match serialize_to_value(resource, params)? {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => return Err(not_an_object(resource)),
    };

    let mut query = IndexMap::new();
    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(ResourceError::Encode {
                    resource,
                    reason: format!("query parameter `{key}` is not a scalar"),
                });
            }
        };
        query.insert(key, value);
    }

    Ok(query)
}

/// Serializes a write record into a JSON object body.
fn serialize_to_body<T: Serialize>(
    resource: &'static str,
    data: &T,
) -> Result<Map<String, Value>, ResourceError> {
    match serialize_to_value(resource, data)? {
        Value::Object(map) => Ok(map),
        _ => Err(not_an_object(resource)),
    }
}

fn serialize_to_value<T: Serialize>(
    resource: &'static str,
    value: &T,
) -> Result<Value, ResourceError> {
    serde_json::to_value(value).map_err(|e| ResourceError::Encode {
        resource,
        reason: e.to_string(),
    })
}

fn not_an_object(resource: &'static str) -> ResourceError {
    ResourceError::Encode {
        resource,
        reason: "expected a JSON object".to_string(),
    }
}
