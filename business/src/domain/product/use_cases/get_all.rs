use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductFilter};

#[derive(Debug, Default)]
pub struct GetAllProductsParams {
    pub filter: ProductFilter,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    /// Catalog products matching `params.filter`, in catalog order.
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError>;
}
