use async_trait::async_trait;

use business::domain::cart::model::CartLineItem;
use business::domain::cart::repository::CartStorage;
use business::domain::errors::StorageError;

use super::entity::CartLineItemEntity;
use crate::store::LocalStore;

/// Fixed key the cart document lives under.
const CART_STORAGE_KEY: &str = "supply_cart";

/// Local-file implementation of the cart persistence port.
pub struct CartStorageLocalFile {
    store: LocalStore,
}

impl CartStorageLocalFile {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartStorage for CartStorageLocalFile {
    async fn load(&self) -> Result<Option<Vec<CartLineItem>>, StorageError> {
        let raw = self
            .store
            .get(CART_STORAGE_KEY)
            .await
            .map_err(|_| StorageError::Persistence)?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        let entities: Vec<CartLineItemEntity> =
            serde_json::from_str(&raw).map_err(|_| StorageError::Corrupted)?;

        Ok(Some(
            entities.into_iter().map(|e| e.into_domain()).collect(),
        ))
    }

    async fn save(&self, items: &[CartLineItem]) -> Result<(), StorageError> {
        let entities: Vec<CartLineItemEntity> =
            items.iter().map(CartLineItemEntity::from_domain).collect();
        let raw = serde_json::to_string(&entities).map_err(|_| StorageError::Persistence)?;

        self.store
            .put(CART_STORAGE_KEY, &raw)
            .await
            .map_err(|_| StorageError::Persistence)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.store
            .remove(CART_STORAGE_KEY)
            .await
            .map_err(|_| StorageError::Persistence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StorageConfig;
    use business::domain::product::model::ProductSnapshot;
    use business::domain::shared::value_objects::ProductId;
    use rust_decimal::Decimal;

    async fn open_temp_storage() -> (tempfile::TempDir, CartStorageLocalFile) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(&StorageConfig::new(dir.path()))
            .await
            .unwrap();
        (dir, CartStorageLocalFile::new(store))
    }

    fn line_item(id: &str, quantity: u32, price: Decimal) -> CartLineItem {
        CartLineItem::from_product(
            ProductSnapshot {
                id: ProductId::new(id),
                name: format!("Product {}", id),
                category: "meat".to_string(),
                supplier: "S1".to_string(),
                unit_price: price,
                unit: "kg".to_string(),
                min_order_quantity: 1,
                image_url: Some("https://cdn.test/a.jpg".to_string()),
            },
            quantity,
        )
    }

    #[tokio::test]
    async fn should_load_none_when_no_cart_persisted() {
        let (_dir, storage) = open_temp_storage().await;

        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_persist_and_reload_cart_items() {
        let (_dir, storage) = open_temp_storage().await;
        let items = vec![
            line_item("A", 2, Decimal::new(1050, 2)),
            line_item("B", 1, Decimal::from(4)),
        ];

        storage.save(&items).await.unwrap();
        let loaded = storage.load().await.unwrap().unwrap();

        assert_eq!(loaded, items);
        // Line totals come back derived, not stored.
        assert_eq!(loaded[0].total_price, Decimal::new(2100, 2));
    }

    #[tokio::test]
    async fn should_report_corrupt_document() {
        let (dir, storage) = open_temp_storage().await;
        std::fs::write(dir.path().join("supply_cart.json"), "not json").unwrap();

        assert!(matches!(
            storage.load().await.unwrap_err(),
            StorageError::Corrupted
        ));
    }

    #[tokio::test]
    async fn should_clear_persisted_cart() {
        let (_dir, storage) = open_temp_storage().await;
        storage
            .save(&[line_item("A", 2, Decimal::from(10))])
            .await
            .unwrap();

        storage.clear().await.unwrap();

        assert!(storage.load().await.unwrap().is_none());
    }
}
