use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject};

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::notification::Operation;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::store::CartError;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::view::cart_view::{CartRow, CartView};
use crate::shell::context::CartContext;

#[derive(SimpleObject, Clone)]
pub struct GqlCartRow {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub amount: u32,
    pub formatted_price: String,
    pub formatted_subtotal: String,
    pub can_decrement: bool,
}

#[derive(SimpleObject, Clone)]
pub struct GqlCart {
    pub rows: Vec<GqlCartRow>,
    pub item_count: u32,
    pub formatted_total: String,
}

impl From<CartRow> for GqlCartRow {
    fn from(row: CartRow) -> Self {
        Self {
            id: row.id.0,
            title: row.title,
            image: row.image,
            amount: row.amount,
            formatted_price: row.formatted_price,
            formatted_subtotal: row.formatted_subtotal,
            can_decrement: row.can_decrement,
        }
    }
}

impl From<&Cart> for GqlCart {
    fn from(cart: &Cart) -> Self {
        let view = CartView::from(cart);
        Self {
            rows: view.rows.into_iter().map(Into::into).collect(),
            item_count: view.item_count,
            formatted_total: view.formatted_total,
        }
    }
}

fn to_graphql(operation: Operation, outcome: Result<Cart, CartError>) -> GqlResult<GqlCart> {
    match outcome {
        Ok(cart) => Ok(GqlCart::from(&cart)),
        Err(error) => {
            let notification = error.notification(operation);
            Err(
                async_graphql::Error::new(notification.message()).extend_with(|_, e| {
                    e.set("notification", notification.as_str().to_string())
                }),
            )
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn cart(&self, context: &Context<'_>) -> GqlCart {
        let state = context.data_unchecked::<CartContext>();
        GqlCart::from(&state.cart())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_product(&self, context: &Context<'_>, product_id: u64) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<CartContext>();
        to_graphql(
            Operation::Add,
            state.add_product(ProductId(product_id)).await,
        )
    }

    async fn remove_product(&self, context: &Context<'_>, product_id: u64) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<CartContext>();
        to_graphql(
            Operation::Remove,
            state.remove_product(ProductId(product_id)).await,
        )
    }

    async fn update_product_amount(
        &self,
        context: &Context<'_>,
        product_id: u64,
        amount: i64,
    ) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<CartContext>();
        let command = UpdateProductAmount {
            product_id: ProductId(product_id),
            amount,
        };
        to_graphql(
            Operation::UpdateAmount,
            state.update_product_amount(command).await,
        )
    }
}
