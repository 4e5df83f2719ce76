use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartAction, CartState};
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateQuantityUseCaseImpl {
    pub cart: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<CartState, CartError> {
        self.logger.info(&format!(
            "Setting quantity of {} to {}",
            params.product_id, params.quantity
        ));

        let state = self
            .cart
            .dispatch(CartAction::UpdateQuantity {
                product_id: params.product_id,
                quantity: params.quantity,
            })
            .await?;

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

    fn persisted_item(id: &str, quantity: u32, price: Decimal) -> CartLineItem {
        CartLineItem::from_product(
            ProductSnapshot {
                id: ProductId::new(id),
                name: format!("Product {}", id),
                category: "meat".to_string(),
                supplier: "S1".to_string(),
                unit_price: price,
                unit: "kg".to_string(),
                min_order_quantity: 1,
                image_url: None,
            },
            quantity,
        )
    }

    async fn store_with(items: Vec<CartLineItem>) -> Arc<CartStore> {
        let mut storage = MockStorage::new();
        storage.expect_load().return_once(move || Ok(Some(items)));
        storage.expect_save().returning(|_| Ok(()));
        Arc::new(CartStore::hydrate(Arc::new(storage), mock_logger()).await)
    }

    #[tokio::test]
    async fn should_set_quantity_and_recompute_line_total() {
        let store = store_with(vec![persisted_item("A", 2, Decimal::from(10))]).await;
        let use_case = UpdateQuantityUseCaseImpl {
            cart: store,
            logger: mock_logger(),
        };

        let state = use_case
            .execute(UpdateQuantityParams {
                product_id: ProductId::new("A"),
                quantity: 5,
            })
            .await
            .unwrap();

        assert_eq!(state.items[0].quantity, 5);
        assert_eq!(state.items[0].total_price, Decimal::from(50));
        assert_eq!(state.total_amount, Decimal::from(50));
    }

    #[tokio::test]
    async fn should_remove_item_when_quantity_zero() {
        let store = store_with(vec![
            persisted_item("A", 2, Decimal::from(10)),
            persisted_item("B", 1, Decimal::from(4)),
        ])
        .await;
        let use_case = UpdateQuantityUseCaseImpl {
            cart: store,
            logger: mock_logger(),
        };

        let state = use_case
            .execute(UpdateQuantityParams {
                product_id: ProductId::new("A"),
                quantity: 0,
            })
            .await
            .unwrap();

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].product_id, ProductId::new("B"));
        assert_eq!(state.total_amount, Decimal::from(4));
    }
}
