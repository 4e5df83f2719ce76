use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::product::model::ProductSnapshot;

pub struct AddItemParams {
    /// Catalog snapshot supplied by the caller; see [`ProductSnapshot`].
    pub product: ProductSnapshot,
    /// Requested quantity; `None` falls back to the product's minimum order
    /// quantity.
    pub quantity: Option<u32>,
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<CartState, CartError>;
}
