use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::shared::value_objects::{OrderId, UserId};

use super::errors::{OrderGatewayError, PointsLedgerError};
use super::model::OrderDraft;

/// Service port for the external order-creation endpoint.
///
/// Accepts the finalized order payload and returns the opaque identifier
/// the order system minted for it. The engine does not retry; any retry
/// policy belongs to the adapter or its client.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, draft: &OrderDraft) -> Result<OrderId, OrderGatewayError>;
}

/// Service port for the external points-ledger debit endpoint.
///
/// Debits `amount` from the buyer's prepaid balance and returns the new
/// balance.
#[async_trait]
pub trait PointsLedger: Send + Sync {
    async fn debit(
        &self,
        user_id: &UserId,
        amount: Decimal,
        description: &str,
    ) -> Result<Decimal, PointsLedgerError>;
}
