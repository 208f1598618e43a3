mod command;
mod query;

pub use self::command::ProductCommandService;
pub use self::query::ProductQueryService;

use crate::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    repository::ProductRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductService {
    pub query: DynProductQueryService,
    pub command: DynProductCommandService,
}

impl ProductService {
    pub fn new(products: &ProductRepository) -> Self {
        let query =
            Arc::new(ProductQueryService::new(products.query.clone())) as DynProductQueryService;
        let command = Arc::new(ProductCommandService::new(
            products.query.clone(),
            products.command.clone(),
        )) as DynProductCommandService;

        Self { query, command }
    }
}
