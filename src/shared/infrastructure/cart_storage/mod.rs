use crate::modules::cart::core::cart::Cart;
use async_trait::async_trait;
use thiserror::Error;

pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("stored cart under {key} is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Durable mirror of the cart. It is read once at startup and overwritten in
/// full after every successful mutation.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// An absent mirror loads as an empty cart.
    async fn load(&self) -> Result<Cart, StorageError>;
    async fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}

pub mod in_memory;
pub mod json_file;
