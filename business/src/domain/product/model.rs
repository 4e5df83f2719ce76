use rust_decimal::Decimal;

use crate::domain::shared::value_objects::ProductId;

/// Catalog data supplied by the caller when a product is added to the cart.
///
/// The cart engine copies these values into the line item at insertion time
/// and never re-fetches or re-validates them against the catalog. Prices in
/// the cart are therefore the prices the buyer saw when adding.
///
/// `min_order_quantity` is calling-layer policy: it is the default quantity
/// for a new line item, and callers are expected to floor quantity updates
/// to it. The state transition itself never reads it.
#[derive(Debug, Clone)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub unit_price: Decimal,
    pub unit: String,
    pub min_order_quantity: u32,
    pub image_url: Option<String>,
}
