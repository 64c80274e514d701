//! REST resource infrastructure.
//!
//! This module maps domain operations onto [`ApiRequest`](crate::clients::ApiRequest)s
//! and decodes the responses into typed records:
//!
//! - **Path tables**: [`ResourcePath`] entries resolved with [`get_path`] and
//!   filled with [`build_path`]
//! - **[`ResourceError`]**: request, decode, and encode failures of a resource
//! - **[`ErrorPayload`]**: the JSON shape used to pass a failure on to callers
//! - **[`resources`]**: the concrete resources (currently products)
//!
//! # Example
//!
//! ```rust,ignore
//! use store_api::rest::{ErrorPayload, ResourceError};
//! use store_api::rest::resources::{ProductResource, SaveProductData};
//!
//! let products = ProductResource::from_config(&config)?;
//!
//! match products.create(&data).await {
//!     Ok(product) => println!("Created product {}", product.id),
//!     Err(error) => {
//!         let (status, payload) = ErrorPayload::from_resource_error(&error);
//!         respond(status, serde_json::to_string(&payload)?);
//!     }
//! }
//! ```

mod error_payload;
mod errors;
mod path;

pub mod resources;

// Public exports
pub use error_payload::ErrorPayload;
pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
