use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::notification::Operation;
use crate::modules::cart::store::{CartError, CartStore};
use crate::modules::cart::use_cases::update_product_amount::command::{
    AdjustProductAmount, UpdateProductAmount,
};
use crate::modules::cart::use_cases::update_product_amount::decide::{
    UpdatePlan, decide_update, plan_update, resolve_adjustment,
};

impl CartStore {
    /// Sets the line to an explicit amount. Amounts of zero or less are ignored
    /// without a notification and return the current cart.
    ///
    /// # Errors
    ///
    /// Fails, after notifying, when the product is not in the cart, the stock
    /// does not cover the amount, or the catalog or mirror is unavailable.
    pub async fn update_product_amount(
        &self,
        command: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        tracing::debug!(
            product_id = %command.product_id,
            amount = command.amount,
            "update product amount"
        );
        let outcome = self.try_update_product_amount(command).await;
        self.settle(Operation::UpdateAmount, outcome).await
    }

    /// Moves the line by `step` units, reading its amount under the mutation
    /// lock so overlapping steps never overwrite each other. A step that lands
    /// at zero or below is ignored like any other non-positive amount.
    ///
    /// # Errors
    ///
    /// Fails, after notifying, when the product is not in the cart, the stock
    /// does not cover the new amount, or the catalog or mirror is unavailable.
    pub async fn adjust_product_amount(
        &self,
        command: AdjustProductAmount,
    ) -> Result<Cart, CartError> {
        tracing::debug!(
            product_id = %command.product_id,
            step = command.step,
            "adjust product amount"
        );
        let outcome = self.try_adjust_product_amount(command).await;
        self.settle(Operation::UpdateAmount, outcome).await
    }

    async fn try_update_product_amount(
        &self,
        command: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        let _guard = self.lock().await;
        self.update_locked(self.snapshot(), command).await
    }

    async fn try_adjust_product_amount(
        &self,
        command: AdjustProductAmount,
    ) -> Result<Cart, CartError> {
        let _guard = self.lock().await;
        let cart = self.snapshot();
        let update = resolve_adjustment(&cart, command)?;
        self.update_locked(cart, update).await
    }

    /// Callers hold the mutation lock and pass the snapshot taken under it.
    async fn update_locked(
        &self,
        cart: Cart,
        command: UpdateProductAmount,
    ) -> Result<Cart, CartError> {
        match plan_update(&cart, command) {
            UpdatePlan::Ignore => Ok(cart),
            UpdatePlan::Reject(reason) => Err(reason.into()),
            UpdatePlan::CheckStock { line, requested } => {
                let stock = self.catalog().fetch_stock(command.product_id).await?;
                let decision = decide_update(&cart, line, requested, &stock);
                self.apply(cart, decision).await
            }
        }
    }
}
