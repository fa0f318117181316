// HTTP implementation of the Catalog port.
//
// Endpoints
// - GET {base_url}/products/{id} -> product metadata without a cart amount.
// - GET {base_url}/stock/{id}    -> { id, amount }.
//
// Failures are surfaced as CatalogError; the caller decides how to report them.

use crate::modules::cart::core::product::{ProductId, ProductMetadata, Stock};
use crate::shared::infrastructure::catalog::{Catalog, CatalogError};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        collection: &str,
        resource: &'static str,
        product_id: ProductId,
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{collection}/{product_id}", self.base_url);
        tracing::debug!(%url, "catalog lookup");
        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound {
                resource,
                product_id,
            }),
            status if !status.is_success() => Err(CatalogError::Status {
                resource,
                product_id,
                status: status.as_u16(),
            }),
            _ => {
                let body = response.bytes().await?;
                serde_json::from_slice(&body).map_err(|e| CatalogError::Decode(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn fetch_product(&self, product_id: ProductId) -> Result<ProductMetadata, CatalogError> {
        self.get("products", "product", product_id).await
    }

    async fn fetch_stock(&self, product_id: ProductId) -> Result<Stock, CatalogError> {
        self.get("stock", "stock", product_id).await
    }
}
