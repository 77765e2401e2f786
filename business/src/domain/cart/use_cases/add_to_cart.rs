use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::store::CartStore;
use crate::domain::shared::value_objects::ProductId;

pub struct AddToCartParams {
    pub product_id: ProductId,
    pub quantity: i64,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(
        &self,
        store: &mut CartStore,
        params: AddToCartParams,
    ) -> Result<Option<CartOutcome>, CartError>;
}
