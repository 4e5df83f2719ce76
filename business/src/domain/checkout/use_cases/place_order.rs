use async_trait::async_trait;

use crate::domain::buyer::model::Buyer;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::CheckoutReceipt;
use crate::domain::shared::value_objects::UserId;

pub struct PlaceOrderParams {
    /// Authenticated buyer id; `None` when no one is signed in.
    pub user_id: Option<UserId>,
    /// The session's loaded profile; `None` when it has not arrived yet.
    pub profile: Option<Buyer>,
    /// Checkout PIN attempt for the secondary authentication step.
    pub checkout_pin: Option<String>,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<CheckoutReceipt, CheckoutError>;
}
