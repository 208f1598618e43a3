use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::{ApiResponse, OrderResponse, to_order_response},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(query: DynOrderQueryRepository, command: DynOrderCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let (order, items) = self.command.create(user_id, req).await.map_err(|err| {
            // A bad item reference or stock shortage invalidates the whole
            // order, not just the offending item.
            match err {
                RepositoryError::ForeignKey(msg) | RepositoryError::InsufficientStock(msg) => {
                    error!("❌ Order rejected: {msg}");
                    ServiceError::Validation(vec![msg])
                }
                other => ServiceError::Repo(other),
            }
        })?;

        info!("✅ Created order {} with {} item(s)", order.order_id, items.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order created successfully".to_string(),
            data: to_order_response(order, items),
        })
    }

    async fn update_status(
        &self,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self.command.update_status(req).await?;
        let items = self.query.find_items(order.order_id).await?;

        info!("✅ Updated order {} status to {}", order.order_id, order.status);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order updated successfully".to_string(),
            data: to_order_response(order, items),
        })
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete(id).await?;

        info!("🗑️ Deleted order {id} and its items");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
        domain::requests::{CreateOrderItemRequest, FindAllOrders},
        model::{Order, OrderItem},
    };
    use std::sync::Arc;

    struct StubOrderQueryRepository;

    #[async_trait]
    impl OrderQueryRepositoryTrait for StubOrderQueryRepository {
        async fn find_all(
            &self,
            _req: &FindAllOrders,
        ) -> Result<(Vec<Order>, i64), RepositoryError> {
            Ok((Vec::new(), 0))
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Order>, RepositoryError> {
            Ok(None)
        }

        async fn find_items(&self, _order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_items_for_orders(
            &self,
            _order_ids: &[i32],
        ) -> Result<Vec<OrderItem>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    struct FailingOrderCommandRepository {
        error: fn() -> RepositoryError,
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for FailingOrderCommandRepository {
        async fn create(
            &self,
            _user_id: i32,
            _req: &CreateOrderRequest,
        ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
            Err((self.error)())
        }

        async fn update_status(
            &self,
            _req: &UpdateOrderRequest,
        ) -> Result<Order, RepositoryError> {
            Err((self.error)())
        }

        async fn delete(&self, _id: i32) -> Result<(), RepositoryError> {
            Err((self.error)())
        }
    }

    fn request() -> CreateOrderRequest {
        CreateOrderRequest {
            status: "PENDING".into(),
            client_id: None,
            items: vec![CreateOrderItemRequest {
                product_id: 99,
                quantity: 1,
            }],
        }
    }

    #[tokio::test]
    async fn test_create_with_missing_product_is_validation_error() {
        let service = OrderCommandService::new(
            Arc::new(StubOrderQueryRepository),
            Arc::new(FailingOrderCommandRepository {
                error: || RepositoryError::ForeignKey("Product with ID 99 not found".into()),
            }),
        );

        let err = service.create(1, &request()).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_with_insufficient_stock_is_validation_error() {
        let service = OrderCommandService::new(
            Arc::new(StubOrderQueryRepository),
            Arc::new(FailingOrderCommandRepository {
                error: || RepositoryError::InsufficientStock("Not enough stock".into()),
            }),
        );

        let err = service.create(1, &request()).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_order_is_not_found() {
        let service = OrderCommandService::new(
            Arc::new(StubOrderQueryRepository),
            Arc::new(FailingOrderCommandRepository {
                error: || RepositoryError::NotFound,
            }),
        );

        let err = service.delete(99).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
