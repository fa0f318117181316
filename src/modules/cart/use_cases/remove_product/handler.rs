use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::notification::Operation;
use crate::modules::cart::store::{CartError, CartStore};
use crate::modules::cart::use_cases::remove_product::command::RemoveProduct;
use crate::modules::cart::use_cases::remove_product::decide::decide_remove;

impl CartStore {
    /// # Errors
    ///
    /// Fails, after notifying, when the product is not in the cart or the mirror
    /// cannot be written.
    pub async fn remove_product(&self, command: RemoveProduct) -> Result<Cart, CartError> {
        tracing::debug!(product_id = %command.product_id, "remove product");
        let outcome = self.try_remove_product(command).await;
        self.settle(Operation::Remove, outcome).await
    }

    async fn try_remove_product(&self, command: RemoveProduct) -> Result<Cart, CartError> {
        let _guard = self.lock().await;
        let cart = self.snapshot();
        let decision = decide_remove(&cart, command);
        self.apply(cart, decision).await
    }
}
