use crate::modules::cart::core::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Ordered line items, one per product id, kept in the order they were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.items.iter().find(|product| product.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    /// Replaces the line with the same id in place, or appends it.
    pub fn upsert(&self, product: Product) -> Self {
        let mut items = self.items.clone();
        match items.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => *existing = product,
            None => items.push(product),
        }
        Self { items }
    }

    pub fn without(&self, product_id: ProductId) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|product| product.id != product_id)
                .cloned()
                .collect(),
        }
    }
}

// Zero-quantity lines are never kept.
impl From<Vec<Product>> for Cart {
    fn from(items: Vec<Product>) -> Self {
        items
            .into_iter()
            .filter(|product| product.amount > 0)
            .fold(Cart::new(), |cart, product| cart.upsert(product))
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
