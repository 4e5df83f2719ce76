use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::CartState;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::get_cart::GetCartUseCase;

pub struct GetCartUseCaseImpl {
    pub cart: Arc<CartStore>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> CartState {
        self.cart.state()
    }
}
