mod command;
mod query;

pub use self::command::OrderCommandService;
pub use self::query::OrderQueryService;

use crate::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    repository::OrderRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

impl OrderService {
    pub fn new(orders: &OrderRepository) -> Self {
        let query = Arc::new(OrderQueryService::new(orders.query.clone())) as DynOrderQueryService;
        let command = Arc::new(OrderCommandService::new(
            orders.query.clone(),
            orders.command.clone(),
        )) as DynOrderCommandService;

        Self { query, command }
    }
}
