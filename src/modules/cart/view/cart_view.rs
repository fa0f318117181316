use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::product::{Product, ProductId};
use crate::modules::cart::view::format::format_price;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Display data for one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRow {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub amount: u32,
    pub formatted_price: String,
    pub formatted_subtotal: String,
    pub can_decrement: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub item_count: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub formatted_total: String,
}

/// Unit price is rounded to cents before it is multiplied, so a row never
/// carries fractions of a cent.
pub fn subtotal(product: &Product) -> Decimal {
    product
        .price
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        * Decimal::from(product.amount)
}

pub fn total(cart: &Cart) -> Decimal {
    cart.items().iter().map(subtotal).sum()
}

impl From<&Product> for CartRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            image: product.image.clone(),
            amount: product.amount,
            formatted_price: format_price(product.price),
            formatted_subtotal: format_price(subtotal(product)),
            can_decrement: product.amount > 1,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let total = total(cart);
        Self {
            rows: cart.items().iter().map(CartRow::from).collect(),
            item_count: cart
                .items()
                .iter()
                .fold(0u32, |count, product| count.saturating_add(product.amount)),
            total,
            formatted_total: format_price(total),
        }
    }
}
