use crate::{
    abstract_trait::{ClientQueryServiceTrait, DynClientQueryRepository},
    domain::{
        requests::{FindAllClients, MAX_PAGE_SIZE},
        responses::{ApiResponse, ApiResponsePagination, ClientResponse, Pagination},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;

pub struct ClientQueryService {
    query: DynClientQueryRepository,
}

impl ClientQueryService {
    pub fn new(query: DynClientQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ClientQueryServiceTrait for ClientQueryService {
    async fn find_all(
        &self,
        req: &FindAllClients,
    ) -> Result<ApiResponsePagination<Vec<ClientResponse>>, ServiceError> {
        let (clients, total) = self.query.find_all(req).await?;

        let page_size = req.page_size.clamp(1, MAX_PAGE_SIZE);
        let data = clients.into_iter().map(ClientResponse::from).collect();

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Clients fetched successfully".to_string(),
            data,
            pagination: Pagination::new(req.page.max(1), page_size, total),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ClientResponse>, ServiceError> {
        let client = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Client fetched successfully".to_string(),
            data: ClientResponse::from(client),
        })
    }
}
