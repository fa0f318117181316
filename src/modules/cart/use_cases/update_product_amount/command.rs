use crate::modules::cart::core::product::ProductId;
use serde::Deserialize;

/// `amount` is signed: decrementing a line at one arrives here as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

/// A relative change, resolved against the cart only once the mutation lock is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustProductAmount {
    pub product_id: ProductId,
    pub step: i64,
}
