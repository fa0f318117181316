use crate::modules::cart::core::product::{Product, ProductId, ProductMetadata, Stock};
use rust_decimal::Decimal;

pub struct ProductBuilder {
    inner: Product,
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProductBuilder {
    pub fn new() -> Self {
        Self {
            inner: Product {
                id: ProductId(1),
                title: "Tênis de Caminhada Leve Confortável".to_string(),
                price: Decimal::new(17990, 2),
                image: "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis1.jpg"
                    .to_string(),
                amount: 1,
            },
        }
    }

    pub fn id(mut self, v: u64) -> Self {
        self.inner.id = ProductId(v);
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn price(mut self, v: Decimal) -> Self {
        self.inner.price = v;
        self
    }

    pub fn image(mut self, v: impl Into<String>) -> Self {
        self.inner.image = v.into();
        self
    }

    pub fn amount(mut self, v: u32) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn build(self) -> Product {
        self.inner
    }

    pub fn build_metadata(self) -> ProductMetadata {
        ProductMetadata {
            id: self.inner.id,
            title: self.inner.title,
            price: self.inner.price,
            image: self.inner.image,
        }
    }
}

pub fn stock_of(product_id: u64, amount: u32) -> Stock {
    Stock {
        id: ProductId(product_id),
        amount,
    }
}

#[cfg(test)]
mod cart_product_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let product = ProductBuilder::new()
            .id(9)
            .title("Tênis VR Caminhada Confortável Detalhes Couro Masculino")
            .price(Decimal::new(13990, 2))
            .image("https://example.com/9.jpg")
            .amount(4)
            .build();

        assert_eq!(product.id, ProductId(9));
        assert_eq!(product.price, Decimal::new(13990, 2));
        assert_eq!(product.image, "https://example.com/9.jpg");
        assert_eq!(product.amount, 4);
    }
}
