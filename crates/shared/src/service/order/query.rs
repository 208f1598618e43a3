use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::{FindAllOrders, MAX_PAGE_SIZE},
        responses::{
            ApiResponse, ApiResponsePagination, OrderResponse, Pagination, to_order_response,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::OrderItem,
};
use async_trait::async_trait;
use std::collections::HashMap;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        let (orders, total) = self.query.find_all(req).await?;

        let order_ids: Vec<i32> = orders.iter().map(|o| o.order_id).collect();
        let mut items_by_order: HashMap<i32, Vec<OrderItem>> = HashMap::new();
        for item in self.query.find_items_for_orders(&order_ids).await? {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        let page_size = req.page_size.clamp(1, MAX_PAGE_SIZE);
        let data = orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.order_id).unwrap_or_default();
                to_order_response(order, items)
            })
            .collect();

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Orders fetched successfully".to_string(),
            data,
            pagination: Pagination::new(req.page.max(1), page_size, total),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let items = self.query.find_items(id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order fetched successfully".to_string(),
            data: to_order_response(order, items),
        })
    }
}
