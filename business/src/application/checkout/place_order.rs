use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::store::CartStore;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{BuyerSummary, CheckoutReceipt, OrderDraft};
use crate::domain::checkout::services::{OrderGateway, PointsLedger};
use crate::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::logger::Logger;

/// Checkout protocol: precondition checks, then secondary authentication,
/// order submission, points debit, and the cart clear, in that order.
///
/// Everything up to and including order submission aborts without touching
/// cart or points. A failed points debit after the order exists is the one
/// deliberate exception: the order stands, the failure is logged, and the
/// checkout still completes.
pub struct PlaceOrderUseCaseImpl {
    pub cart: Arc<CartStore>,
    pub orders: Arc<dyn OrderGateway>,
    pub points: Arc<dyn PointsLedger>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<CheckoutReceipt, CheckoutError> {
        // Freezes the cart for the whole attempt; dropped on any early
        // return, which releases the cart unchanged.
        let guard = self
            .cart
            .begin_checkout()
            .map_err(|_| CheckoutError::CheckoutInProgress)?;
        let snapshot = guard.snapshot().clone();

        if snapshot.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let user_id = params.user_id.ok_or(CheckoutError::NotAuthenticated)?;
        let profile = params.profile.ok_or(CheckoutError::ProfileNotLoaded)?;

        if profile.points_balance < snapshot.total_amount {
            return Err(CheckoutError::InsufficientPoints {
                shortfall: snapshot.total_amount - profile.points_balance,
            });
        }

        if !profile.has_checkout_pin() {
            return Err(CheckoutError::PinNotConfigured);
        }
        let pin = params.checkout_pin.ok_or(CheckoutError::PinRequired)?;
        if !profile.verify_checkout_pin(&pin) {
            return Err(CheckoutError::PinIncorrect);
        }

        let draft = OrderDraft::from_cart(&snapshot, BuyerSummary::from(&profile));
        self.logger.info(&format!(
            "Submitting order for {}: {} items, total {}",
            profile.restaurant_name, snapshot.total_items, snapshot.total_amount
        ));
        let order_id = self.orders.submit(&draft).await?;
        self.logger.info(&format!("Order {} created", order_id));

        // The order exists from here on; a failed debit must not undo it.
        let description = format!("Order {}", order_id);
        let (points_debited, new_points_balance) = match self
            .points
            .debit(&user_id, snapshot.total_amount, &description)
            .await
        {
            Ok(balance) => (true, Some(balance)),
            Err(err) => {
                self.logger.warn(&format!(
                    "Points debit of {} for order {} failed ({}); order stands, no debit recorded",
                    snapshot.total_amount, order_id, err
                ));
                (false, None)
            }
        };

        guard.complete().await;
        self.logger
            .info(&format!("Checkout complete, order {}", order_id));

        Ok(CheckoutReceipt {
            order_id,
            total_amount: snapshot.total_amount,
            points_debited,
            new_points_balance,
        })
    }
}
