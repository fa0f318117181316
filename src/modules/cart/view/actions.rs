// Quantity buttons of the cart table, translated into relative store commands.
// The store resolves the step against the cart it holds, so a decrement at one
// lands on zero, which it ignores.

use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::use_cases::update_product_amount::command::AdjustProductAmount;

pub fn increment(product_id: ProductId) -> AdjustProductAmount {
    AdjustProductAmount {
        product_id,
        step: 1,
    }
}

pub fn decrement(product_id: ProductId) -> AdjustProductAmount {
    AdjustProductAmount {
        product_id,
        step: -1,
    }
}
