use crate::modules::cart::core::{
    cart::Cart,
    decision::{DecideError, Decision},
    product::{Product, Stock},
};

/// `line` is either the existing cart line or the freshly fetched product at amount zero.
pub fn decide_add(cart: &Cart, line: Product, stock: &Stock) -> Decision {
    let requested = line.amount.saturating_add(1);
    if !stock.covers(requested) {
        return Decision::Rejected {
            reason: DecideError::InsufficientStock {
                product_id: line.id,
                requested,
                available: stock.amount,
            },
        };
    }
    Decision::Accepted {
        cart: cart.upsert(line.with_amount(requested)),
    }
}
