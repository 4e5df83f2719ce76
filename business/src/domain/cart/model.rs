use rust_decimal::Decimal;

use super::errors::CartError;
use crate::domain::product::model::ProductSnapshot;
use crate::domain::shared::value_objects::ProductId;

/// One row in the cart: a single product with its quantity and price.
///
/// Display metadata and the classification fields are copied from the
/// product at insertion and never change afterwards. `total_price` is
/// always `unit_price * quantity`; it is recomputed on every quantity
/// change and never persisted on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub image_url: Option<String>,
    pub unit: String,
    pub category: String,
    pub supplier: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

impl CartLineItem {
    pub fn from_product(product: ProductSnapshot, quantity: u32) -> Self {
        let total_price = product.unit_price * Decimal::from(quantity);
        Self {
            product_id: product.id,
            product_name: product.name,
            image_url: product.image_url,
            unit: product.unit,
            category: product.category,
            supplier: product.supplier,
            quantity,
            unit_price: product.unit_price,
            total_price,
        }
    }

    /// Constructor for data already persisted in storage.
    /// The line total is derived from quantity and unit price, never read
    /// back from storage.
    #[allow(clippy::too_many_arguments)]
    pub fn from_storage(
        product_id: ProductId,
        product_name: String,
        image_url: Option<String>,
        unit: String,
        category: String,
        supplier: String,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            product_id,
            product_name,
            image_url,
            unit,
            category,
            supplier,
            quantity,
            unit_price,
            total_price: unit_price * Decimal::from(quantity),
        }
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total_price = self.unit_price * Decimal::from(quantity);
    }
}

/// Cart operations, dispatched through [`CartState::apply`].
#[derive(Debug, Clone)]
pub enum CartAction {
    Add {
        product: ProductSnapshot,
        quantity: u32,
    },
    Remove {
        product_id: ProductId,
    },
    UpdateQuantity {
        product_id: ProductId,
        quantity: u32,
    },
    Clear,
}

/// The cart aggregate: line items in insertion order, unique by product id,
/// plus totals recomputed from the full item set after every mutation.
///
/// A non-empty cart holds products from exactly one supplier and one
/// category; adds that would break that rule are rejected without touching
/// the state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartLineItem>,
    pub total_items: u32,
    pub total_amount: Decimal,
}

impl CartState {
    /// Rebuilds a cart from persisted line items, recomputing all totals.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        let mut state = Self {
            items,
            ..Self::default()
        };
        state.recalculate();
        state
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity of the given product in the cart, 0 if absent.
    /// Listing views use this to decide between an "add" control and a
    /// quantity stepper.
    pub fn item_quantity(&self, product_id: &ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| &item.product_id == product_id)
            .map_or(0, |item| item.quantity)
    }

    /// Pure transition function: applies one action and returns the new
    /// state, leaving `self` untouched. All side effects (persistence,
    /// logging) live in the store wrapper.
    pub fn apply(&self, action: CartAction) -> Result<CartState, CartError> {
        let mut next = self.clone();
        match action {
            CartAction::Add { product, quantity } => {
                if quantity == 0 {
                    return Err(CartError::QuantityNotPositive);
                }
                if let Some(first) = next.items.first() {
                    if first.supplier != product.supplier {
                        return Err(CartError::SupplierMismatch {
                            in_cart: first.supplier.clone(),
                            attempted: product.supplier,
                        });
                    }
                    if first.category != product.category {
                        return Err(CartError::CategoryMismatch {
                            in_cart: first.category.clone(),
                            attempted: product.category,
                        });
                    }
                }
                match next
                    .items
                    .iter_mut()
                    .find(|item| item.product_id == product.id)
                {
                    Some(line) => {
                        let merged = line.quantity + quantity;
                        line.set_quantity(merged);
                    }
                    None => next.items.push(CartLineItem::from_product(product, quantity)),
                }
            }
            CartAction::Remove { product_id } => {
                next.items.retain(|item| item.product_id != product_id);
            }
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                if quantity == 0 {
                    next.items.retain(|item| item.product_id != product_id);
                } else if let Some(line) = next
                    .items
                    .iter_mut()
                    .find(|item| item.product_id == product_id)
                {
                    line.set_quantity(quantity);
                }
            }
            CartAction::Clear => {
                next.items.clear();
            }
        }
        next.recalculate();
        Ok(next)
    }

    fn recalculate(&mut self) {
        self.total_items = self.items.iter().map(|item| item.quantity).sum();
        self.total_amount = self.items.iter().map(|item| item.total_price).sum();
    }
}
