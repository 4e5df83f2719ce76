use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveItemParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveItemParams) -> Result<CartState, CartError>;
}
