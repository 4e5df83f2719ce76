use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::buyer::model::Buyer;
use crate::domain::cart::model::{CartLineItem, CartState};
use crate::domain::shared::value_objects::{OrderId, UserId};

/// Buyer identity as it travels on an order.
#[derive(Debug, Clone)]
pub struct BuyerSummary {
    pub user_id: UserId,
    pub email: String,
    pub restaurant_name: String,
}

impl From<&Buyer> for BuyerSummary {
    fn from(buyer: &Buyer) -> Self {
        Self {
            user_id: buyer.user_id.clone(),
            email: buyer.email.clone(),
            restaurant_name: buyer.restaurant_name.clone(),
        }
    }
}

/// Immutable order payload, built from the checkout snapshot of the cart.
/// Once built it never changes, whatever happens to the live cart.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub items: Vec<CartLineItem>,
    pub total_amount: Decimal,
    pub buyer: BuyerSummary,
    pub created_at: DateTime<Utc>,
}

impl OrderDraft {
    pub fn from_cart(snapshot: &CartState, buyer: BuyerSummary) -> Self {
        Self {
            items: snapshot.items.clone(),
            total_amount: snapshot.total_amount,
            buyer,
            created_at: Utc::now(),
        }
    }
}

/// Outcome of a completed checkout.
///
/// `points_debited` is false when the ledger debit failed after the order
/// was created; the checkout still counts as successful in that case.
#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    pub order_id: OrderId,
    pub total_amount: Decimal,
    pub points_debited: bool,
    pub new_points_balance: Option<Decimal>,
}
