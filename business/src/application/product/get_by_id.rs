use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductCatalog;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        match self.catalog.get_by_id(&params.id).await {
            Ok(product) => {
                self.logger.debug(&format!(
                    "Product {} found with {} in stock",
                    params.id, product.stock
                ));
                Ok(product)
            }
            Err(RepositoryError::NotFound) => {
                self.logger
                    .warn(&format!("Product {} is not in the catalog", params.id));
                Err(ProductError::NotFound)
            }
            Err(e) => {
                self.logger
                    .error(&format!("Catalog lookup for {} failed: {}", params.id, e));
                Err(ProductError::Repository(e))
            }
        }
    }
}
