use crate::modules::cart::core::product::{ProductId, ProductMetadata, Stock};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{resource} {product_id} not found")]
    NotFound {
        resource: &'static str,
        product_id: ProductId,
    },

    #[error("catalog responded with status {status} for {resource} {product_id}")]
    Status {
        resource: &'static str,
        product_id: ProductId,
        status: u16,
    },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("undecodable catalog response: {0}")]
    Decode(String),

    #[error("catalog answered {returned} when asked for {requested}")]
    Mismatch {
        requested: ProductId,
        returned: ProductId,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Read-only lookups against the remote catalog. No caching, no retries.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn fetch_product(&self, product_id: ProductId) -> Result<ProductMetadata, CatalogError>;
    async fn fetch_stock(&self, product_id: ProductId) -> Result<Stock, CatalogError>;
}

pub mod http;
pub mod in_memory;
