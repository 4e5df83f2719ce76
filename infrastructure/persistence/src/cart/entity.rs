use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartLineItem;
use business::domain::shared::value_objects::ProductId;

/// On-disk schema for one cart line.
///
/// The line total is not stored: it is derived from quantity and unit price
/// when the item is rebuilt.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartLineItemEntity {
    pub product_id: String,
    pub product_name: String,
    pub image_url: Option<String>,
    pub unit: String,
    pub category: String,
    pub supplier: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl CartLineItemEntity {
    pub fn from_domain(item: &CartLineItem) -> Self {
        Self {
            product_id: item.product_id.as_str().to_string(),
            product_name: item.product_name.clone(),
            image_url: item.image_url.clone(),
            unit: item.unit.clone(),
            category: item.category.clone(),
            supplier: item.supplier.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }

    pub fn into_domain(self) -> CartLineItem {
        CartLineItem::from_storage(
            ProductId::new(self.product_id),
            self.product_name,
            self.image_url,
            self.unit,
            self.category,
            self.supplier,
            self.quantity,
            self.unit_price,
        )
    }
}
