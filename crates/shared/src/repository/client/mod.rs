mod command;
mod query;

use self::command::ClientCommandRepository;
use self::query::ClientQueryRepository;

use crate::{
    abstract_trait::{DynClientCommandRepository, DynClientQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ClientRepository {
    pub query: DynClientQueryRepository,
    pub command: DynClientCommandRepository,
}

impl ClientRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(ClientQueryRepository::new(pool.clone())) as DynClientQueryRepository;
        let command =
            Arc::new(ClientCommandRepository::new(pool.clone())) as DynClientCommandRepository;

        Self { query, command }
    }
}
