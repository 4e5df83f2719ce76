use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartAction, CartState};
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveItemUseCaseImpl {
    pub cart: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemUseCase for RemoveItemUseCaseImpl {
    async fn execute(&self, params: RemoveItemParams) -> Result<CartState, CartError> {
        self.logger
            .info(&format!("Removing product {} from cart", params.product_id));

        let state = self
            .cart
            .dispatch(CartAction::Remove {
                product_id: params.product_id,
            })
            .await?;

        Ok(state)
    }
}
