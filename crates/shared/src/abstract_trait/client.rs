use crate::{
    domain::{
        requests::{CreateClientRequest, FindAllClients, UpdateClientRequest},
        responses::{ApiResponse, ApiResponsePagination, ClientResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Client,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynClientQueryRepository = Arc<dyn ClientQueryRepositoryTrait + Send + Sync>;
pub type DynClientCommandRepository = Arc<dyn ClientCommandRepositoryTrait + Send + Sync>;
pub type DynClientQueryService = Arc<dyn ClientQueryServiceTrait + Send + Sync>;
pub type DynClientCommandService = Arc<dyn ClientCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ClientQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllClients) -> Result<(Vec<Client>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Client>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, RepositoryError>;
    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Client>, RepositoryError>;
}

#[async_trait]
pub trait ClientCommandRepositoryTrait {
    async fn create(
        &self,
        req: &CreateClientRequest,
        created_by: i32,
    ) -> Result<Client, RepositoryError>;
    async fn update(&self, req: &UpdateClientRequest) -> Result<Client, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ClientQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllClients,
    ) -> Result<ApiResponsePagination<Vec<ClientResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ClientResponse>, ServiceError>;
}

#[async_trait]
pub trait ClientCommandServiceTrait {
    async fn create(
        &self,
        created_by: i32,
        req: &CreateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError>;
    async fn update(
        &self,
        req: &UpdateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
