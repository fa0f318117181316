use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::{DecideError, Decision};
use crate::modules::cart::core::notification::{Notification, Operation};
use crate::shared::infrastructure::cart_storage::{CartStorage, StorageError};
use crate::shared::infrastructure::catalog::{Catalog, CatalogError};
use crate::shared::infrastructure::notifier::Notifier;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard, watch};

#[derive(Debug, Error)]
pub enum CartError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("rejected: {0}")]
    Rejected(#[from] DecideError),
}

impl CartError {
    pub fn notification(&self, operation: Operation) -> Notification {
        match self {
            Self::Rejected(reason) => Notification::for_rejection(operation, reason),
            Self::Catalog(_) | Self::Storage(_) => Notification::generic_failure(operation),
        }
    }
}

/// Sole owner of the cart. The in-memory cart lives in a watch channel so every
/// replacement reaches subscribers; the storage only ever holds a mirror.
///
/// Mutations are serialized: each one holds the mutation lock from the moment it
/// reads the current cart until the new cart is published.
pub struct CartStore {
    storage: Arc<dyn CartStorage>,
    catalog: Arc<dyn Catalog>,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<Cart>,
    mutation: Mutex<()>,
}

impl CartStore {
    /// Seeds the in-memory cart from the persisted mirror.
    ///
    /// # Errors
    ///
    /// Fails when the mirror exists but cannot be read or decoded.
    pub async fn open(
        storage: Arc<dyn CartStorage>,
        catalog: Arc<dyn Catalog>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StorageError> {
        let cart = storage.load().await?;
        tracing::info!(lines = cart.len(), "cart loaded from storage");
        let (state, _) = watch::channel(cart);
        Ok(Self {
            storage,
            catalog,
            notifier,
            state,
            mutation: Mutex::new(()),
        })
    }

    pub fn snapshot(&self) -> Cart {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    pub(crate) fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, ()> {
        self.mutation.lock().await
    }

    /// Persists an accepted cart and then publishes it. A rejected decision
    /// leaves both untouched.
    pub(crate) async fn apply(&self, current: Cart, decision: Decision) -> Result<Cart, CartError> {
        match decision {
            Decision::Accepted { cart } => {
                self.storage.save(&cart).await?;
                self.state.send_replace(cart.clone());
                tracing::info!(lines = cart.len(), "cart updated");
                Ok(cart)
            }
            Decision::Ignored => Ok(current),
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }

    /// Reports a failed operation to the shopper and hands the outcome back.
    pub(crate) async fn settle(
        &self,
        operation: Operation,
        outcome: Result<Cart, CartError>,
    ) -> Result<Cart, CartError> {
        if let Err(error) = &outcome {
            tracing::warn!(?operation, %error, "cart operation failed");
            self.notifier.notify(error.notification(operation)).await;
        }
        outcome
    }
}
