use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::store::CartStore;
use crate::shared::infrastructure::cart_storage::StorageError;
use crate::shared::infrastructure::cart_storage::in_memory::InMemoryCartStorage;
use crate::shared::infrastructure::catalog::in_memory::InMemoryCatalog;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shell::context::CartContext;
use crate::tests::fixtures::products::ProductBuilder;
use std::sync::Arc;

/// A store wired to in-memory adapters, with the adapters kept at hand for assertions.
pub struct StoreHarness {
    pub store: Arc<CartStore>,
    pub storage: Arc<InMemoryCartStorage>,
    pub catalog: Arc<InMemoryCatalog>,
    pub notifier: Arc<InMemoryNotifier>,
}

pub struct ContextHarness {
    pub context: CartContext,
    pub storage: Arc<InMemoryCartStorage>,
    pub catalog: Arc<InMemoryCatalog>,
}

impl StoreHarness {
    pub fn builder() -> StoreHarnessBuilder {
        StoreHarnessBuilder::default()
    }
}

#[derive(Default)]
pub struct StoreHarnessBuilder {
    products: Vec<(u64, u32)>,
    payload: Option<String>,
    catalog_offline: bool,
    catalog_delay_ms: u64,
}

#[allow(dead_code)]
impl StoreHarnessBuilder {
    /// Registers a catalog product with the given stock level.
    pub fn product(mut self, id: u64, stock: u32) -> Self {
        self.products.push((id, stock));
        self
    }

    /// Seeds the persisted mirror with the cart.
    pub fn cart(mut self, cart: Cart) -> Self {
        self.payload = Some(serde_json::to_string(&cart).unwrap());
        self
    }

    pub fn payload(mut self, raw: impl Into<String>) -> Self {
        self.payload = Some(raw.into());
        self
    }

    pub fn catalog_offline(mut self) -> Self {
        self.catalog_offline = true;
        self
    }

    pub fn catalog_delay_ms(mut self, delay_ms: u64) -> Self {
        self.catalog_delay_ms = delay_ms;
        self
    }

    async fn adapters(self) -> (Arc<InMemoryCartStorage>, Arc<InMemoryCatalog>) {
        let storage = match self.payload {
            Some(payload) => InMemoryCartStorage::with_payload(payload),
            None => InMemoryCartStorage::new(),
        };
        let mut catalog = InMemoryCatalog::new();
        for (id, stock) in self.products {
            catalog
                .insert_product(
                    ProductBuilder::new()
                        .id(id)
                        .title(format!("Product {id}"))
                        .build_metadata(),
                )
                .await;
            catalog.set_stock(ProductId(id), stock).await;
        }
        catalog.set_delay_ms(self.catalog_delay_ms);
        if self.catalog_offline {
            catalog.toggle_offline();
        }
        (Arc::new(storage), Arc::new(catalog))
    }

    pub async fn try_open(self) -> Result<StoreHarness, StorageError> {
        let (storage, catalog) = self.adapters().await;
        let notifier = Arc::new(InMemoryNotifier::new());
        let store = CartStore::open(storage.clone(), catalog.clone(), notifier.clone()).await?;
        Ok(StoreHarness {
            store: Arc::new(store),
            storage,
            catalog,
            notifier,
        })
    }

    pub async fn open(self) -> StoreHarness {
        self.try_open().await.expect("store failed to open")
    }

    pub async fn open_context(self) -> ContextHarness {
        let (storage, catalog) = self.adapters().await;
        let context = CartContext::open(storage.clone(), catalog.clone())
            .await
            .expect("context failed to open");
        ContextHarness {
            context,
            storage,
            catalog,
        }
    }
}
