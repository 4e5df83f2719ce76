use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::checkout::errors::OrderGatewayError;
use business::domain::checkout::model::OrderDraft;
use business::domain::checkout::services::OrderGateway;
use business::domain::shared::value_objects::OrderId;

use crate::client::OrderingApiClient;

#[derive(Debug, Serialize)]
struct OrderRequest {
    items: Vec<OrderItemRequest>,
    total_amount: Decimal,
    buyer: BuyerRequest,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct OrderItemRequest {
    product_id: String,
    product_name: String,
    image_url: Option<String>,
    unit: String,
    category: String,
    supplier: String,
    quantity: u32,
    unit_price: Decimal,
    total_price: Decimal,
}

#[derive(Debug, Serialize)]
struct BuyerRequest {
    id: String,
    email: String,
    restaurant_name: String,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    order_id: String,
}

impl OrderRequest {
    fn from_draft(draft: &OrderDraft) -> Self {
        Self {
            items: draft
                .items
                .iter()
                .map(|item| OrderItemRequest {
                    product_id: item.product_id.as_str().to_string(),
                    product_name: item.product_name.clone(),
                    image_url: item.image_url.clone(),
                    unit: item.unit.clone(),
                    category: item.category.clone(),
                    supplier: item.supplier.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    total_price: item.total_price,
                })
                .collect(),
            total_amount: draft.total_amount,
            buyer: BuyerRequest {
                id: draft.buyer.user_id.as_str().to_string(),
                email: draft.buyer.email.clone(),
                restaurant_name: draft.buyer.restaurant_name.clone(),
            },
            created_at: draft.created_at,
        }
    }
}

/// HTTP adapter of the order-creation port.
pub struct OrderGatewayHttp {
    client: OrderingApiClient,
}

impl OrderGatewayHttp {
    pub fn new(client: OrderingApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderGateway for OrderGatewayHttp {
    async fn submit(&self, draft: &OrderDraft) -> Result<OrderId, OrderGatewayError> {
        let request = OrderRequest::from_draft(draft);

        let response = self
            .client
            .client
            .post(self.client.orders_url())
            .json(&request)
            .send()
            .await
            .map_err(|_| OrderGatewayError::Unavailable)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = if body.trim().is_empty() {
                format!("order service returned {}", status)
            } else {
                body
            };
            return Err(OrderGatewayError::Rejected { reason });
        }

        let body: OrderResponse = response
            .json()
            .await
            .map_err(|_| OrderGatewayError::Unavailable)?;

        Ok(OrderId::new(body.order_id))
    }
}
