mod command;
mod query;

pub use self::command::ClientCommandService;
pub use self::query::ClientQueryService;

use crate::{
    abstract_trait::{DynClientCommandService, DynClientQueryService},
    repository::ClientRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ClientService {
    pub query: DynClientQueryService,
    pub command: DynClientCommandService,
}

impl ClientService {
    pub fn new(clients: &ClientRepository) -> Self {
        let query =
            Arc::new(ClientQueryService::new(clients.query.clone())) as DynClientQueryService;
        let command = Arc::new(ClientCommandService::new(
            clients.query.clone(),
            clients.command.clone(),
        )) as DynClientCommandService;

        Self { query, command }
    }
}
