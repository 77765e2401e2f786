use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductCatalog;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        let filter = params.filter;
        if filter.is_empty() {
            self.logger.debug("Listing the whole catalog");
        } else {
            self.logger
                .debug(&format!("Listing catalog with filter {:?}", filter));
        }

        let catalog = self.catalog.get_all().await?;
        let available = catalog.len();
        let matching: Vec<Product> = catalog
            .into_iter()
            .filter(|product| product.matches(&filter))
            .collect();

        self.logger.info(&format!(
            "{} of {} catalog products match",
            matching.len(),
            available
        ));
        Ok(matching)
    }
}
