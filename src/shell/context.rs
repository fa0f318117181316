use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::notification::Notification;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::store::{CartError, CartStore};
use crate::modules::cart::use_cases::add_product::command::AddProduct;
use crate::modules::cart::use_cases::remove_product::command::RemoveProduct;
use crate::modules::cart::use_cases::update_product_amount::command::{
    AdjustProductAmount, UpdateProductAmount,
};
use crate::shared::infrastructure::cart_storage::{CartStorage, StorageError};
use crate::shared::infrastructure::catalog::Catalog;
use crate::shared::infrastructure::notifier::broadcast::BroadcastNotifier;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// The handle views hold on the cart: a snapshot, change and notification
/// subscriptions, and the three mutations. Cheap to clone.
#[derive(Clone)]
pub struct CartContext {
    store: Arc<CartStore>,
    notifier: Arc<BroadcastNotifier>,
}

impl CartContext {
    /// # Errors
    ///
    /// Fails when the persisted cart cannot be loaded.
    pub async fn open(
        storage: Arc<dyn CartStorage>,
        catalog: Arc<dyn Catalog>,
    ) -> Result<Self, StorageError> {
        let notifier = Arc::new(BroadcastNotifier::default());
        let store = CartStore::open(storage, catalog, notifier.clone()).await?;
        Ok(Self {
            store: Arc::new(store),
            notifier,
        })
    }

    pub fn cart(&self) -> Cart {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.store.subscribe()
    }

    pub fn notifications(&self) -> broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    /// # Errors
    ///
    /// See [`CartStore::add_product`].
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        self.store.add_product(AddProduct { product_id }).await
    }

    /// # Errors
    ///
    /// See [`CartStore::remove_product`].
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        self.store.remove_product(RemoveProduct { product_id }).await
    }

    /// # Errors
    ///
    /// See [`CartStore::update_product_amount`].
    pub async fn update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        self.store.update_product_amount(update).await
    }

    /// # Errors
    ///
    /// See [`CartStore::adjust_product_amount`].
    pub async fn adjust_product_amount(
        &self,
        adjust: AdjustProductAmount,
    ) -> Result<Cart, CartError> {
        self.store.adjust_product_amount(adjust).await
    }
}

#[cfg(test)]
mod cart_context_tests {
    use super::*;
    use crate::tests::fixtures::store::StoreHarness;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_share_one_cart_between_clones() {
        let harness = StoreHarness::builder().product(1, 5).open_context().await;
        let view = harness.context.clone();

        harness.context.add_product(ProductId(1)).await.unwrap();

        assert_eq!(view.cart().find(ProductId(1)).unwrap().amount, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_wake_subscribers_on_every_change() {
        let harness = StoreHarness::builder().product(1, 5).open_context().await;
        let mut changes = harness.context.subscribe();

        harness.context.add_product(ProductId(1)).await.unwrap();
        changes.changed().await.unwrap();
        assert_eq!(changes.borrow_and_update().len(), 1);

        harness.context.remove_product(ProductId(1)).await.unwrap();
        changes.changed().await.unwrap();
        assert!(changes.borrow_and_update().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_deliver_failure_notifications_to_listeners() {
        let harness = StoreHarness::builder().product(1, 0).open_context().await;
        let mut notifications = harness.context.notifications();

        let result = harness.context.add_product(ProductId(1)).await;

        assert!(result.is_err());
        assert_eq!(
            notifications.recv().await.unwrap(),
            Notification::InsufficientStock
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_leave_subscribers_quiet_when_an_update_is_ignored() {
        let harness = StoreHarness::builder().product(1, 5).open_context().await;
        harness.context.add_product(ProductId(1)).await.unwrap();
        let changes = harness.context.subscribe();

        harness
            .context
            .update_product_amount(UpdateProductAmount {
                product_id: ProductId(1),
                amount: 0,
            })
            .await
            .unwrap();

        assert!(!changes.has_changed().unwrap());
    }
}
