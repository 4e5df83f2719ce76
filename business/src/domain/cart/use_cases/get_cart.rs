use async_trait::async_trait;

use crate::domain::cart::model::CartState;

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self) -> CartState;
}
