use crate::modules::cart::core::cart::Cart;
use crate::shared::infrastructure::cart_storage::{CartStorage, StorageError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Keeps the serialized mirror as a JSON string, so loads go through the same
/// decoding a real payload would.
#[derive(Default)]
pub struct InMemoryCartStorage {
    payload: RwLock<Option<String>>,
    writes: AtomicUsize,
    is_offline: AtomicBool,
}

impl InMemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RwLock::new(Some(payload.into())),
            ..Self::default()
        }
    }

    /// Takes `&self` so a store that already loaded its cart can lose its storage.
    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn is_offline(&self) -> bool {
        self.is_offline.load(Ordering::SeqCst)
    }

    pub async fn payload(&self) -> Option<String> {
        self.payload.read().await.clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CartStorage for InMemoryCartStorage {
    async fn load(&self) -> Result<Cart, StorageError> {
        if self.is_offline() {
            return Err(StorageError::Backend("Cart storage offline".into()));
        }
        match self.payload.read().await.as_deref() {
            None => Ok(Cart::new()),
            Some(payload) => serde_json::from_str(payload).map_err(|e| StorageError::Corrupt {
                key: "in-memory".into(),
                reason: e.to_string(),
            }),
        }
    }

    async fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        if self.is_offline() {
            return Err(StorageError::Backend("Cart storage offline".into()));
        }
        let payload = serde_json::to_string(cart)?;
        *self.payload.write().await = Some(payload);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
