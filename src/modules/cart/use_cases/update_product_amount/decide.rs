use crate::modules::cart::core::{
    cart::Cart,
    decision::{DecideError, Decision},
    product::{Product, Stock},
};
use crate::modules::cart::use_cases::update_product_amount::command::{
    AdjustProductAmount, UpdateProductAmount,
};

/// What to do with an update before the catalog is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatePlan {
    Ignore,
    Reject(DecideError),
    CheckStock { line: Product, requested: u32 },
}

pub fn plan_update(cart: &Cart, command: UpdateProductAmount) -> UpdatePlan {
    if command.amount <= 0 {
        return UpdatePlan::Ignore;
    }
    match cart.find(command.product_id) {
        Some(line) => UpdatePlan::CheckStock {
            line: line.clone(),
            requested: u32::try_from(command.amount).unwrap_or(u32::MAX),
        },
        None => UpdatePlan::Reject(DecideError::NotInCart(command.product_id)),
    }
}

/// Turns a step into an absolute amount. Only rows already in the cart can be stepped.
pub fn resolve_adjustment(
    cart: &Cart,
    command: AdjustProductAmount,
) -> Result<UpdateProductAmount, DecideError> {
    let line = cart
        .find(command.product_id)
        .ok_or(DecideError::NotInCart(command.product_id))?;
    Ok(UpdateProductAmount {
        product_id: command.product_id,
        amount: i64::from(line.amount).saturating_add(command.step),
    })
}

pub fn decide_update(cart: &Cart, line: Product, requested: u32, stock: &Stock) -> Decision {
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
