use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::notification::Notification;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::store::CartError;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::view::cart_view::CartView;
use crate::shared::infrastructure::cart_storage::json_file::JsonFileCartStorage;
use crate::shared::infrastructure::cart_storage::{CartStorage, DEFAULT_STORAGE_KEY};
use crate::shared::infrastructure::catalog::in_memory::InMemoryCatalog;
use crate::shell::context::CartContext;
use crate::tests::fixtures::products::ProductBuilder;
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::Arc;

async fn seeded_catalog() -> Arc<InMemoryCatalog> {
    let catalog = InMemoryCatalog::new();
    catalog
        .insert_product(
            ProductBuilder::new()
                .id(1)
                .price(Decimal::new(17990, 2))
                .build_metadata(),
        )
        .await;
    catalog.set_stock(ProductId(1), 3).await;
    catalog
        .insert_product(
            ProductBuilder::new()
                .id(2)
                .title("Tênis VR Caminhada Confortável Detalhes Couro Masculino")
                .price(Decimal::new(13990, 2))
                .build_metadata(),
        )
        .await;
    catalog.set_stock(ProductId(2), 5).await;
    Arc::new(catalog)
}

async fn open(dir: &Path, catalog: Arc<InMemoryCatalog>) -> CartContext {
    let storage = Arc::new(JsonFileCartStorage::new(dir, DEFAULT_STORAGE_KEY));
    CartContext::open(storage, catalog).await.unwrap()
}

#[tokio::test]
async fn a_cart_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let context = open(dir.path(), seeded_catalog().await).await;

    context.add_product(ProductId(1)).await.unwrap();
    context.add_product(ProductId(1)).await.unwrap();
    let cart = context.add_product(ProductId(2)).await.unwrap();
    drop(context);

    let reopened = open(dir.path(), seeded_catalog().await).await;
    assert_eq!(reopened.cart(), cart);
    assert_eq!(reopened.cart().find(ProductId(1)).unwrap().amount, 2);

    let view = CartView::from(&reopened.cart());
    assert_eq!(view.item_count, 3);
    assert_eq!(view.formatted_total, "R$ 499,70");
}

#[tokio::test]
async fn adding_past_the_stock_level_is_refused_and_reported() {
    let dir = tempfile::tempdir().unwrap();
    let context = open(dir.path(), seeded_catalog().await).await;
    let mut notifications = context.notifications();

    for _ in 0..3 {
        context.add_product(ProductId(1)).await.unwrap();
    }
    let result = context.add_product(ProductId(1)).await;

    assert!(matches!(result, Err(CartError::Rejected(_))));
    assert_eq!(
        notifications.recv().await.unwrap(),
        Notification::InsufficientStock
    );
    assert_eq!(context.cart().find(ProductId(1)).unwrap().amount, 3);

    let storage = JsonFileCartStorage::new(dir.path(), DEFAULT_STORAGE_KEY);
    assert_eq!(storage.load().await.unwrap(), context.cart());
}

#[tokio::test]
async fn setting_an_amount_of_zero_leaves_the_cart_alone() {
    let dir = tempfile::tempdir().unwrap();
    let context = open(dir.path(), seeded_catalog().await).await;
    context.add_product(ProductId(2)).await.unwrap();
    let mut changes = context.subscribe();

    let cart = context
        .update_product_amount(UpdateProductAmount {
            product_id: ProductId(2),
            amount: 0,
        })
        .await
        .unwrap();

    assert_eq!(cart.find(ProductId(2)).unwrap().amount, 1);
    assert!(!changes.has_changed().unwrap());
}

#[tokio::test]
async fn removing_a_line_keeps_the_others_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let context = open(dir.path(), seeded_catalog().await).await;
    context.add_product(ProductId(1)).await.unwrap();
    context.add_product(ProductId(2)).await.unwrap();

    let cart = context.remove_product(ProductId(2)).await.unwrap();

    let ids: Vec<ProductId> = cart.items().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![ProductId(1)]);
    let reopened = open(dir.path(), seeded_catalog().await).await;
    assert_eq!(reopened.cart(), Cart::from(cart.items().to_vec()));
}
