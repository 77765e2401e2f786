use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::InMemoryProductCatalog;
use persistence::storage::file::{FileStorage, FileStorageConfig};
use persistence::storage::memory::InMemoryStorage;

use business::application::cart::add_to_cart::AddToCartUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::domain::cart::store::CartStore;
use business::domain::logger::Logger;
use business::domain::storage::KeyValueStorage;

use crate::config::storage_config::{StorageBackend, StorageConfig};
use crate::shell::notifier::ConsoleNotifier;

/// Owns the cart store and the use cases driving it.
pub struct DependencyContainer {
    pub store: CartStore,
    pub get_all_products: Arc<GetAllProductsUseCaseImpl>,
    pub get_product_by_id: Arc<GetProductByIdUseCaseImpl>,
    pub add_to_cart: Arc<AddToCartUseCaseImpl>,
}

impl DependencyContainer {
    pub fn new(config: &StorageConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let storage: Arc<dyn KeyValueStorage> = match config.backend {
            StorageBackend::File => Arc::new(FileStorage::new(FileStorageConfig::new(
                config.data_dir.clone(),
            ))),
            StorageBackend::Memory => Arc::new(InMemoryStorage::new()),
        };
        let catalog = Arc::new(InMemoryProductCatalog::seeded()?);

        let mut store = CartStore::hydrate(
            config.cart_key.clone(),
            storage,
            Arc::new(ConsoleNotifier),
            logger.clone(),
        );
        store.subscribe(|snapshot| {
            tracing::debug!(
                lines = snapshot.lines.len(),
                count = snapshot.count,
                total = %snapshot.total,
                "cart changed"
            );
        });

        // Product use cases
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id = Arc::new(GetProductByIdUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_to_cart = Arc::new(AddToCartUseCaseImpl { catalog, logger });

        Ok(Self {
            store,
            get_all_products,
            get_product_by_id,
            add_to_cart,
        })
    }
}
