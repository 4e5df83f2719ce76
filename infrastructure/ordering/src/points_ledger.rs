use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::checkout::errors::PointsLedgerError;
use business::domain::checkout::services::PointsLedger;
use business::domain::shared::value_objects::UserId;

use crate::client::OrderingApiClient;

#[derive(Debug, Serialize)]
struct DebitRequest<'a> {
    user_id: &'a str,
    amount: Decimal,
    description: &'a str,
}

#[derive(Debug, Deserialize)]
struct DebitResponse {
    balance: Decimal,
}

/// HTTP adapter of the points-ledger debit port.
pub struct PointsLedgerHttp {
    client: OrderingApiClient,
}

impl PointsLedgerHttp {
    pub fn new(client: OrderingApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PointsLedger for PointsLedgerHttp {
    async fn debit(
        &self,
        user_id: &UserId,
        amount: Decimal,
        description: &str,
    ) -> Result<Decimal, PointsLedgerError> {
        let request = DebitRequest {
            user_id: user_id.as_str(),
            amount,
            description,
        };

        let response = self
            .client
            .client
            .post(self.client.points_debit_url())
            .json(&request)
            .send()
            .await
            .map_err(|_| PointsLedgerError::Unavailable)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = if body.trim().is_empty() {
                format!("points ledger returned {}", status)
            } else {
                body
            };
            return Err(PointsLedgerError::Rejected { reason });
        }

        let body: DebitResponse = response
            .json()
            .await
            .map_err(|_| PointsLedgerError::Unavailable)?;

        Ok(body.balance)
    }
}
