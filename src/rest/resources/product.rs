//! Product resource implementation.
//!
//! This module provides [`ProductResource`], which maps product operations onto
//! requests to the store API, and the records exchanged with it.
//!
//! # Example
//!
//! ```rust,ignore
//! use store_api::rest::resources::{ListProductsData, ProductResource, SaveProductData, SortDirection};
//!
//! let products = ProductResource::new(client);
//!
//! // List the three most recent products
//! let params = ListProductsData {
//!     limit: Some(3),
//!     sort: Some(SortDirection::Desc),
//! };
//! let latest = products.list(Some(params)).await?;
//!
//! // Create a new product
//! let created = products
//!     .create(&SaveProductData {
//!         title: "Backpack".to_string(),
//!         price: 109.95,
//!         description: "Fits 15 inch laptops".to_string(),
//!         category: "men's clothing".to_string(),
//!         image: "https://example.com/backpack.png".to_string(),
//!     })
//!     .await?;
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, ApiRequest, HttpMethod, StoreApiClient};
use crate::config::ApiConfig;
use crate::error::ConfigError;
use crate::rest::resources::{serialize_to_body, serialize_to_query};
use crate::rest::{build_path, get_path, ResourceError, ResourceOperation, ResourcePath};

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Returns the wire value (`"asc"` or `"desc"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Customer rating summary of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RatingData {
    /// The average rating.
    pub rate: f64,
    /// The number of ratings.
    pub count: u64,
}

/// A product as returned by the store API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductData {
    /// The unique identifier of the product.
    pub id: u64,
    /// The name of the product.
    pub title: String,
    /// The unit price.
    pub price: f64,
    /// The description of the product.
    pub description: String,
    /// The category the product is listed in.
    pub category: String,
    /// URL of the product image.
    pub image: String,
    /// Customer ratings. Read-only, computed by the upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingData>,
}

impl ProductData {
    /// Returns the writable fields of this product.
    #[must_use]
    pub fn to_save_data(&self) -> SaveProductData {
        SaveProductData {
            title: self.title.clone(),
            price: self.price,
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        }
    }
}

/// The write payload for creating or updating a product.
///
/// Carries no `id` (taken from the path) and no `rating` (computed upstream).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveProductData {
    /// The name of the product.
    pub title: String,
    /// The unit price.
    pub price: f64,
    /// The description of the product.
    pub description: String,
    /// The category the product is listed in.
    pub category: String,
    /// URL of the product image.
    pub image: String,
}

/// Query filters for listing products.
///
/// Unset filters are omitted from the query string entirely.
///
/// # Example
///
/// ```rust
/// use store_api::rest::resources::{ListProductsData, SortDirection};
///
/// let params = ListProductsData {
///     limit: Some(5),
///     ..Default::default()
/// };
/// assert_eq!(
///     serde_json::to_value(&params).unwrap(),
///     serde_json::json!({"limit": 5})
/// );
///
/// let params = ListProductsData {
///     sort: Some(SortDirection::Desc),
///     ..Default::default()
/// };
/// assert_eq!(
///     serde_json::to_value(&params).unwrap(),
///     serde_json::json!({"sort": "desc"})
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListProductsData {
    /// Maximum number of products to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Sort order by ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDirection>,
}

/// REST resource for store products.
///
/// Each operation sends exactly one request and decodes the response into
/// typed records. Decoding problems are reported as
/// [`ResourceError::Decode`], never swallowed.
///
/// | Operation | Method | Path |
/// |-----------|--------|------|
/// | [`list`](Self::list) | GET | `/products` |
/// | [`show`](Self::show) | GET | `/products/{id}` |
/// | [`create`](Self::create) | POST | `/products` |
/// | [`update`](Self::update) | PUT | `/products/{id}` |
/// | [`delete`](Self::delete) | DELETE | `/products/{id}` |
#[derive(Clone, Debug)]
pub struct ProductResource {
    client: StoreApiClient,
}

// Verify ProductResource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProductResource>();
};

impl ProductResource {
    /// The resource name used in error messages.
    pub const NAME: &'static str = "Product";

    /// The path table for product operations.
    pub const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "/products"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Show,
            &["id"],
            "/products/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "/products"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "/products/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "/products/{id}",
        ),
    ];

    /// Creates the resource on top of an existing client.
    #[must_use]
    pub const fn new(client: StoreApiClient) -> Self {
        Self { client }
    }

    /// Creates the resource with a new client built from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the client cannot be created.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(StoreApiClient::new(config)?))
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &StoreApiClient {
        &self.client
    }

    /// Lists products in upstream order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails and
    /// [`ResourceError::Decode`] if the body is not a list of products.
    pub async fn list(
        &self,
        params: Option<ListProductsData>,
    ) -> Result<Vec<ProductData>, ResourceError> {
        let mut request = Self::request(ResourceOperation::List, None)?;
        if let Some(params) = params {
            request = request.replace_query(serialize_to_query(Self::NAME, &params)?);
        }

        self.fetch(ResourceOperation::List, request).await
    }

    /// Fetches a single product.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails (e.g., 404) and
    /// [`ResourceError::Decode`] if the body is not a product.
    pub async fn show(&self, id: u64) -> Result<ProductData, ResourceError> {
        let request = Self::request(ResourceOperation::Show, Some(id))?;
        self.fetch(ResourceOperation::Show, request).await
    }

    /// Creates a product, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails (e.g., 422) and
    /// [`ResourceError::Decode`] if the body is not a product.
    pub async fn create(&self, data: &SaveProductData) -> Result<ProductData, ResourceError> {
        let request = Self::request(ResourceOperation::Create, None)?
            .replace_body(serialize_to_body(Self::NAME, data)?);
        self.fetch(ResourceOperation::Create, request).await
    }

    /// Replaces a product, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails and
    /// [`ResourceError::Decode`] if the body is not a product.
    pub async fn update(
        &self,
        id: u64,
        data: &SaveProductData,
    ) -> Result<ProductData, ResourceError> {
        let request = Self::request(ResourceOperation::Update, Some(id))?
            .replace_body(serialize_to_body(Self::NAME, data)?);
        self.fetch(ResourceOperation::Update, request).await
    }

    /// Deletes a product, returning the deleted record as echoed upstream.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Api`] if the request fails and
    /// [`ResourceError::Decode`] if the body is not a product.
    pub async fn delete(&self, id: u64) -> Result<ProductData, ResourceError> {
        let request = Self::request(ResourceOperation::Delete, Some(id))?;
        self.fetch(ResourceOperation::Delete, request).await
    }

    /// Builds an empty request for an operation from the path table.
    fn request(operation: ResourceOperation, id: Option<u64>) -> Result<ApiRequest, ResourceError> {
        let available_ids: &[&str] = if id.is_some() { &["id"] } else { &[] };
        let path = get_path(Self::PATHS, operation, available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;

        let uri = match id {
            Some(id) => build_path(path.template, &[("id", id)]),
            None => path.template.to_string(),
        };

        Ok(ApiRequest::new(path.http_method, uri))
    }

    /// Sends a request and decodes the response body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: ResourceOperation,
        request: ApiRequest,
    ) -> Result<T, ResourceError> {
        let response = self.client.send(request).await?;

        response.decode().map_err(|source| ResourceError::Decode {
            resource: Self::NAME,
            operation: operation.as_str(),
            source,
        })
    }
}
