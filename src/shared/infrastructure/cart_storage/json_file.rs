use crate::modules::cart::core::cart::Cart;
use crate::shared::infrastructure::cart_storage::{CartStorage, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores the cart as a JSON array in `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// reader never observes a half-written mirror.
pub struct JsonFileCartStorage {
    key: String,
    path: PathBuf,
}

impl JsonFileCartStorage {
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = dir.as_ref().join(file_name(&key));
        Self { key, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Storage keys may carry characters that are not portable in file names.
fn file_name(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.json")
}

#[async_trait]
impl CartStorage for JsonFileCartStorage {
    async fn load(&self) -> Result<Cart, StorageError> {
        let payload = match tokio::fs::read(&self.path).await {
            Ok(payload) => payload,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Cart::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&payload).map_err(|e| StorageError::Corrupt {
            key: self.key.clone(),
            reason: e.to_string(),
        })
    }

    async fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let payload = serde_json::to_vec(cart)?;
        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, payload).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}
