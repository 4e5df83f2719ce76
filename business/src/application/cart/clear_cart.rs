use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartAction, CartState};
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::clear_cart::ClearCartUseCase;
use crate::domain::logger::Logger;

/// Manual cart clear, triggered by the buyer. Checkout clears the cart
/// through its own guard instead of this use case.
pub struct ClearCartUseCaseImpl {
    pub cart: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self) -> Result<CartState, CartError> {
        self.logger.info("Clearing cart");

        let state = self.cart.dispatch(CartAction::Clear).await?;

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLineItem;
    use crate::domain::cart::repository::CartStorage;
    use crate::domain::errors::StorageError;
    use crate::domain::product::model::ProductSnapshot;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub Storage {}

        #[async_trait]
        impl CartStorage for Storage {
            async fn load(&self) -> Result<Option<Vec<CartLineItem>>, StorageError>;
            async fn save(&self, items: &[CartLineItem]) -> Result<(), StorageError>;
            async fn clear(&self) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn persisted_item(id: &str, quantity: u32) -> CartLineItem {
        CartLineItem::from_product(
            ProductSnapshot {
                id: ProductId::new(id),
                name: format!("Product {}", id),
                category: "meat".to_string(),
                supplier: "S1".to_string(),
                unit_price: Decimal::from(10),
                unit: "kg".to_string(),
                min_order_quantity: 1,
                image_url: None,
            },
            quantity,
        )
    }

    #[tokio::test]
    async fn should_reset_cart_to_empty_state() {
        let mut storage = MockStorage::new();
        storage
            .expect_load()
            .return_once(|| Ok(Some(vec![persisted_item("A", 2), persisted_item("B", 3)])));
        storage
            .expect_save()
            .withf(|items: &[CartLineItem]| items.is_empty())
            .returning(|_| Ok(()));

        let store = Arc::new(CartStore::hydrate(Arc::new(storage), mock_logger()).await);
        let use_case = ClearCartUseCaseImpl {
            cart: store.clone(),
            logger: mock_logger(),
        };

        let state = use_case.execute().await.unwrap();

        assert!(state.is_empty());
        assert_eq!(state.total_items, 0);
        assert_eq!(state.total_amount, Decimal::ZERO);
        assert!(store.state().is_empty());
    }
}
