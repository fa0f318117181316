use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::product::ProductId;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("product {product_id} has {available} in stock, {requested} requested")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted { cart: Cart },
    Ignored,
    Rejected { reason: DecideError },
}
