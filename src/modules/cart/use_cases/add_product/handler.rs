use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::notification::Operation;
use crate::modules::cart::store::{CartError, CartStore};
use crate::modules::cart::use_cases::add_product::command::AddProduct;
use crate::modules::cart::use_cases::add_product::decide::decide_add;
use crate::shared::infrastructure::catalog::CatalogError;

impl CartStore {
    /// Adds one unit of the product, fetching its metadata the first time it is added.
    ///
    /// # Errors
    ///
    /// Every error has already been reported to the notifier when it is returned.
    pub async fn add_product(&self, command: AddProduct) -> Result<Cart, CartError> {
        tracing::debug!(product_id = %command.product_id, "add product");
        let outcome = self.try_add_product(command).await;
        self.settle(Operation::Add, outcome).await
    }

    async fn try_add_product(&self, command: AddProduct) -> Result<Cart, CartError> {
        let _guard = self.lock().await;
        let cart = self.snapshot();
        let line = match cart.find(command.product_id) {
            Some(line) => line.clone(),
            None => {
                let product = self.catalog().fetch_product(command.product_id).await?;
                if product.id != command.product_id {
                    return Err(CatalogError::Mismatch {
                        requested: command.product_id,
                        returned: product.id,
                    }
                    .into());
                }
                product.into_line_item()
            }
        };
        let stock = self.catalog().fetch_stock(command.product_id).await?;
        let decision = decide_add(&cart, line, &stock);
        self.apply(cart, decision).await
    }
}
