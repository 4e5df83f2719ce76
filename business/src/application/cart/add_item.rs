use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartAction, CartState};
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};
use crate::domain::logger::Logger;

pub struct AddItemUseCaseImpl {
    pub cart: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<CartState, CartError> {
        // The minimum-order-quantity default is calling-layer policy; the
        // transition function only ever sees a concrete quantity.
        let quantity = params
            .quantity
            .unwrap_or(params.product.min_order_quantity);

        self.logger.info(&format!(
            "Adding {} x {} to cart",
            quantity, params.product.name
        ));

        let state = self
            .cart
            .dispatch(CartAction::Add {
                product: params.product,
                quantity,
            })
            .await?;

        self.logger.info(&format!(
            "Cart now holds {} items, total {}",
            state.total_items, state.total_amount
        ));
        Ok(state)
    }
}
