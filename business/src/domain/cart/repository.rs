use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::CartLineItem;

/// Local persistence port for the cart.
///
/// Backed by a key-value store under a fixed cart key: read once when the
/// session's cart store is hydrated, written after every mutation. A write
/// that fails loses at most the most recent mutation; no durability is
/// claimed beyond that.
#[async_trait]
pub trait CartStorage: Send + Sync {
    async fn load(&self) -> Result<Option<Vec<CartLineItem>>, StorageError>;
    async fn save(&self, items: &[CartLineItem]) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}
