use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::core::notification::{Notification, Operation};
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::store::CartError;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::view::actions;
use crate::modules::cart::view::cart_view::CartView;
use crate::shared::infrastructure::catalog::CatalogError;
use crate::shell::context::CartContext;

#[derive(Deserialize)]
pub struct UpdateAmountBody {
    pub amount: i64,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub notification: Notification,
    pub message: &'static str,
}

fn status_for(error: &CartError) -> StatusCode {
    match error {
        CartError::Rejected(DecideError::InsufficientStock { .. }) => StatusCode::CONFLICT,
        CartError::Rejected(DecideError::NotInCart(_))
        | CartError::Catalog(CatalogError::NotFound { .. }) => StatusCode::NOT_FOUND,
        CartError::Catalog(_) => StatusCode::BAD_GATEWAY,
        CartError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond(operation: Operation, outcome: Result<Cart, CartError>) -> Response {
    match outcome {
        Ok(cart) => Json(CartView::from(&cart)).into_response(),
        Err(error) => {
            let notification = error.notification(operation);
            (
                status_for(&error),
                Json(ErrorBody {
                    notification,
                    message: notification.message(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn show(State(context): State<CartContext>) -> Json<CartView> {
    Json(CartView::from(&context.cart()))
}

pub async fn add(State(context): State<CartContext>, Path(id): Path<u64>) -> Response {
    respond(Operation::Add, context.add_product(ProductId(id)).await)
}

pub async fn remove(State(context): State<CartContext>, Path(id): Path<u64>) -> Response {
    respond(Operation::Remove, context.remove_product(ProductId(id)).await)
}

pub async fn update(
    State(context): State<CartContext>,
    Path(id): Path<u64>,
    body: Result<Json<UpdateAmountBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = UpdateProductAmount {
        product_id: ProductId(id),
        amount: body.amount,
    };
    respond(
        Operation::UpdateAmount,
        context.update_product_amount(command).await,
    )
}

pub async fn increment(State(context): State<CartContext>, Path(id): Path<u64>) -> Response {
    respond(
        Operation::UpdateAmount,
        context
            .adjust_product_amount(actions::increment(ProductId(id)))
            .await,
    )
}

pub async fn decrement(State(context): State<CartContext>, Path(id): Path<u64>) -> Response {
    respond(
        Operation::UpdateAmount,
        context
            .adjust_product_amount(actions::decrement(ProductId(id)))
            .await,
    )
}
