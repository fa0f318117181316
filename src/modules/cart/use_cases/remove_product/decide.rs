use crate::modules::cart::core::{
    cart::Cart,
    decision::{DecideError, Decision},
};
use crate::modules::cart::use_cases::remove_product::command::RemoveProduct;

pub fn decide_remove(cart: &Cart, command: RemoveProduct) -> Decision {
    if !cart.contains(command.product_id) {
        return Decision::Rejected {
            reason: DecideError::NotInCart(command.product_id),
        };
    }
    Decision::Accepted {
        cart: cart.without(command.product_id),
    }
}
