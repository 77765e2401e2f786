use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::add_to_cart::{AddToCartParams, AddToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductCatalog;

pub struct AddToCartUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(
        &self,
        store: &mut CartStore,
        params: AddToCartParams,
    ) -> Result<Option<CartOutcome>, CartError> {
        self.logger.info(&format!(
            "Adding product {} (x{}) to cart",
            params.product_id, params.quantity
        ));

        // Stock is read fresh from the catalog on every add
        let product = self
            .catalog
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let outcome = store.add_item(&product, params.quantity);

        self.logger.info(&format!(
            "Cart now holds {} items totalling {}",
            store.count(),
            store.total()
        ));
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::notifier::{Notification, Notifier};
    use crate::domain::product::model::{Category, Product};
    use crate::domain::shared::value_objects::ProductId;
    use crate::domain::storage::KeyValueStorage;
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl ProductCatalog for Catalog {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    mock! {
        pub Storage {}

        impl KeyValueStorage for Storage {
            fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
            fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
            fn remove(&self, key: &str) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Notify {}

        impl Notifier for Notify {
            fn notify(&self, notification: &Notification);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn empty_store() -> CartStore {
        let mut storage = MockStorage::new();
        storage.expect_read().returning(|_| Ok(None));
        storage.expect_write().returning(|_, _| Ok(()));
        let mut notifier = MockNotify::new();
        notifier.expect_notify().returning(|_| ());
        CartStore::hydrate("cartItems", Arc::new(storage), Arc::new(notifier), mock_logger())
    }

    fn smartphone() -> Product {
        Product {
            id: ProductId::new("prod1"),
            name: "Super Smartphone X".to_string(),
            description: "Latest generation smartphone with AI features.".to_string(),
            price: Decimal::new(79999, 2),
            stock: 25,
            category: Category {
                id: "cat1".to_string(),
                name: "Electronics".to_string(),
                description: Some("Gadgets and devices".to_string()),
            },
            image_url: "https://placehold.co/600x400.png?text=Smartphone+X".to_string(),
        }
    }

    #[tokio::test]
    async fn should_add_catalog_product_to_cart() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_by_id()
            .returning(|_| Ok(smartphone()));

        let use_case = AddToCartUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };
        let mut store = empty_store();

        let result = use_case
            .execute(
                &mut store,
                AddToCartParams {
                    product_id: ProductId::new("prod1"),
                    quantity: 2,
                },
            )
            .await;

        assert!(matches!(result, Ok(Some(CartOutcome::Added { .. }))));
        assert_eq!(store.count(), 2);
        assert_eq!(store.total(), Decimal::new(159998, 2));
    }

    #[tokio::test]
    async fn should_return_product_not_found_when_catalog_misses() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddToCartUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };
        let mut store = empty_store();

        let result = use_case
            .execute(
                &mut store,
                AddToCartParams {
                    product_id: ProductId::new("prod99"),
                    quantity: 1,
                },
            )
            .await;

        assert!(matches!(result, Err(CartError::ProductNotFound)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_unavailable_catalog() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::Unavailable));

        let use_case = AddToCartUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };
        let mut store = empty_store();

        let result = use_case
            .execute(
                &mut store,
                AddToCartParams {
                    product_id: ProductId::new("prod1"),
                    quantity: 1,
                },
            )
            .await;

        assert!(matches!(result, Err(CartError::Repository(_))));
    }
}
