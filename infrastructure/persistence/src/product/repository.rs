use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductCatalog;
use business::domain::shared::value_objects::ProductId;

use super::entity::CatalogDocument;

const SEED_CATALOG: &str = include_str!("../../seed/catalog.json");

/// Product catalog held entirely in memory.
pub struct InMemoryProductCatalog {
    products: Vec<Product>,
}

impl InMemoryProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Catalog preloaded with the bundled mock products.
    pub fn seeded() -> Result<Self, serde_json::Error> {
        Self::from_json(SEED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::new(document.into_domain()))
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn should_load_seed_catalog() {
        let catalog = InMemoryProductCatalog::seeded().unwrap();

        let products = catalog.get_all().await.unwrap();

        assert_eq!(products.len(), 11);
        assert_eq!(products[0].id, ProductId::new("prod1"));
        assert_eq!(products[0].price, Decimal::new(79999, 2));
    }

    #[tokio::test]
    async fn should_include_out_of_stock_product() {
        let catalog = InMemoryProductCatalog::seeded().unwrap();

        let product = catalog.get_by_id(&ProductId::new("prod4")).await.unwrap();

        assert_eq!(product.stock, 0);
        assert_eq!(product.category.name, "Books");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let catalog = InMemoryProductCatalog::seeded().unwrap();

        let result = catalog.get_by_id(&ProductId::new("prod404")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }
}
