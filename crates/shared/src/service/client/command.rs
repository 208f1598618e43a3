use crate::{
    abstract_trait::{
        ClientCommandServiceTrait, DynClientCommandRepository, DynClientQueryRepository,
    },
    domain::{
        requests::{CreateClientRequest, UpdateClientRequest},
        responses::{ApiResponse, ClientResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ClientCommandService {
    query: DynClientQueryRepository,
    command: DynClientCommandRepository,
}

impl ClientCommandService {
    pub fn new(query: DynClientQueryRepository, command: DynClientCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl ClientCommandServiceTrait for ClientCommandService {
    async fn create(
        &self,
        created_by: i32,
        req: &CreateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError> {
        info!("📇 Creating client with email: {}", req.email);

        if self.query.find_by_email(&req.email).await?.is_some() {
            error!("❌ Client email already taken: {}", req.email);
            return Err(ServiceError::Conflict("Email already registered".to_string()));
        }

        if self.query.find_by_tax_id(&req.tax_id).await?.is_some() {
            error!("❌ Client tax id already taken: {}", req.tax_id);
            return Err(ServiceError::Conflict("Tax id already registered".to_string()));
        }

        let client = self.command.create(req, created_by).await?;

        info!("✅ Created client {}", client.client_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Client created successfully".to_string(),
            data: ClientResponse::from(client),
        })
    }

    async fn update(
        &self,
        req: &UpdateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError> {
        let id = req
            .client_id
            .ok_or_else(|| ServiceError::Validation(vec!["Client ID is required".to_string()]))?;

        let existing = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        if let Some(email) = &req.email {
            if *email != existing.email {
                if let Some(other) = self.query.find_by_email(email).await? {
                    if other.client_id != id {
                        return Err(ServiceError::Conflict(
                            "Email already registered by another client".to_string(),
                        ));
                    }
                }
            }
        }

        if let Some(tax_id) = &req.tax_id {
            if *tax_id != existing.tax_id {
                if let Some(other) = self.query.find_by_tax_id(tax_id).await? {
                    if other.client_id != id {
                        return Err(ServiceError::Conflict(
                            "Tax id already registered by another client".to_string(),
                        ));
                    }
                }
            }
        }

        let client = self.command.update(req).await?;

        info!("✅ Updated client {id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Client updated successfully".to_string(),
            data: ClientResponse::from(client),
        })
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete(id).await?;

        info!("🗑️ Deleted client {id}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{ClientCommandRepositoryTrait, ClientQueryRepositoryTrait},
        domain::requests::FindAllClients,
        model::Client,
    };
    use std::sync::Arc;

    struct StubClientQueryRepository {
        by_email: Option<Client>,
        by_tax_id: Option<Client>,
        by_id: Option<Client>,
    }

    #[async_trait]
    impl ClientQueryRepositoryTrait for StubClientQueryRepository {
        async fn find_all(
            &self,
            _req: &FindAllClients,
        ) -> Result<(Vec<Client>, i64), RepositoryError> {
            Ok((Vec::new(), 0))
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Client>, RepositoryError> {
            Ok(self.by_id.clone())
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<Client>, RepositoryError> {
            Ok(self.by_email.clone())
        }

        async fn find_by_tax_id(&self, _tax_id: &str) -> Result<Option<Client>, RepositoryError> {
            Ok(self.by_tax_id.clone())
        }
    }

    struct StubClientCommandRepository;

    #[async_trait]
    impl ClientCommandRepositoryTrait for StubClientCommandRepository {
        async fn create(
            &self,
            req: &CreateClientRequest,
            created_by: i32,
        ) -> Result<Client, RepositoryError> {
            Ok(Client {
                client_id: 1,
                name: req.name.clone(),
                email: req.email.clone(),
                tax_id: req.tax_id.clone(),
                created_by,
                created_at: None,
                updated_at: None,
            })
        }

        async fn update(&self, _req: &UpdateClientRequest) -> Result<Client, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete(&self, _id: i32) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    fn sample_client(id: i32, email: &str, tax_id: &str) -> Client {
        Client {
            client_id: id,
            name: "Acme".into(),
            email: email.into(),
            tax_id: tax_id.into(),
            created_by: 1,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_sets_creating_user() {
        let service = ClientCommandService::new(
            Arc::new(StubClientQueryRepository {
                by_email: None,
                by_tax_id: None,
                by_id: None,
            }),
            Arc::new(StubClientCommandRepository),
        );

        let response = service
            .create(
                7,
                &CreateClientRequest {
                    name: "Acme".into(),
                    email: "acme@example.com".into(),
                    tax_id: "12345678901".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(response.data.created_by, 7);
    }

    #[tokio::test]
    async fn test_create_duplicate_email_conflicts() {
        let service = ClientCommandService::new(
            Arc::new(StubClientQueryRepository {
                by_email: Some(sample_client(3, "acme@example.com", "11111111111")),
                by_tax_id: None,
                by_id: None,
            }),
            Arc::new(StubClientCommandRepository),
        );

        let err = service
            .create(
                7,
                &CreateClientRequest {
                    name: "Acme".into(),
                    email: "acme@example.com".into(),
                    tax_id: "12345678901".into(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_missing_client_is_not_found() {
        let service = ClientCommandService::new(
            Arc::new(StubClientQueryRepository {
                by_email: None,
                by_tax_id: None,
                by_id: None,
            }),
            Arc::new(StubClientCommandRepository),
        );

        let err = service
            .update(&UpdateClientRequest {
                client_id: Some(99),
                name: Some("Acme".into()),
                email: None,
                tax_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_tax_id_taken_by_other_client_conflicts() {
        let service = ClientCommandService::new(
            Arc::new(StubClientQueryRepository {
                by_email: None,
                by_tax_id: Some(sample_client(3, "other@example.com", "22222222222")),
                by_id: Some(sample_client(1, "acme@example.com", "11111111111")),
            }),
            Arc::new(StubClientCommandRepository),
        );

        let err = service
            .update(&UpdateClientRequest {
                client_id: Some(1),
                name: None,
                email: None,
                tax_id: Some("22222222222".into()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
