// Composition root for the cart.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the concrete catalog client and cart storage.
// - Open the cart context the inbound adapters share.
// - Expose the HTTP router and the GraphQL schema to the binary.

pub mod config;
pub mod context;
pub mod graphql;
pub mod http;

use crate::shared::infrastructure::cart_storage::json_file::JsonFileCartStorage;
use crate::shared::infrastructure::catalog::http::HttpCatalog;
use crate::shell::config::CartConfig;
use crate::shell::context::CartContext;
use std::sync::Arc;

/// Wires the production adapters and loads the persisted cart.
///
/// # Errors
///
/// Fails when the HTTP client cannot be built or the persisted cart is unreadable.
pub async fn bootstrap(config: &CartConfig) -> anyhow::Result<CartContext> {
    let catalog = HttpCatalog::new(config.catalog_base_url.clone(), config.catalog_timeout)?;
    let storage = JsonFileCartStorage::new(&config.storage_dir, config.storage_key.clone());
    tracing::info!(
        catalog = %config.catalog_base_url,
        storage = %storage.path().display(),
        "bootstrapping cart"
    );
    let context = CartContext::open(Arc::new(storage), Arc::new(catalog)).await?;
    Ok(context)
}
