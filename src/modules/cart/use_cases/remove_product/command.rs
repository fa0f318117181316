use crate::modules::cart::core::product::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveProduct {
    pub product_id: ProductId,
}
