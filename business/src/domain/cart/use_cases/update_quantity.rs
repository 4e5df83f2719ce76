use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateQuantityParams {
    pub product_id: ProductId,
    /// New absolute quantity; 0 removes the line item. Callers are expected
    /// to floor this to the product's minimum order quantity before
    /// invoking; the engine does not know that policy.
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<CartState, CartError>;
}
