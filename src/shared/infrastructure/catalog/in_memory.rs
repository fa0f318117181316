// In memory implementation of the Catalog port.
//
// Purpose
// - Drive cart store tests without a catalog service.
//
// Responsibilities
// - Serve product metadata and stock levels seeded by the test.
// - Count stock lookups so tests can assert no remote call was made.

use crate::modules::cart::core::product::{ProductId, ProductMetadata, Stock};
use crate::shared::infrastructure::catalog::{Catalog, CatalogError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<ProductId, ProductMetadata>>,
    stock: RwLock<HashMap<ProductId, u32>>,
    stock_lookups: AtomicUsize,
    delay_ms: u64,
    is_offline: bool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Stalls every lookup, so concurrent operations interleave at the await point.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub async fn insert_product(&self, product: ProductMetadata) {
        self.insert_product_as(product.id, product).await;
    }

    /// Serves `product` for lookups of `product_id`, whatever id it carries.
    pub async fn insert_product_as(&self, product_id: ProductId, product: ProductMetadata) {
        self.products.write().await.insert(product_id, product);
    }

    pub async fn set_stock(&self, product_id: ProductId, amount: u32) {
        self.stock.write().await.insert(product_id, amount);
    }

    pub fn stock_lookups(&self) -> usize {
        self.stock_lookups.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait::async_trait]
impl Catalog for InMemoryCatalog {
    async fn fetch_product(&self, product_id: ProductId) -> Result<ProductMetadata, CatalogError> {
        self.pause().await;
        if self.is_offline {
            return Err(CatalogError::Backend("Catalog offline".into()));
        }
        self.products
            .read()
            .await
            .get(&product_id)
            .cloned()
            .ok_or(CatalogError::NotFound {
                resource: "product",
                product_id,
            })
    }

    async fn fetch_stock(&self, product_id: ProductId) -> Result<Stock, CatalogError> {
        self.stock_lookups.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if self.is_offline {
            return Err(CatalogError::Backend("Catalog offline".into()));
        }
        self.stock
            .read()
            .await
            .get(&product_id)
            .map(|amount| Stock {
                id: product_id,
                amount: *amount,
            })
            .ok_or(CatalogError::NotFound {
                resource: "stock",
                product_id,
            })
    }
}
