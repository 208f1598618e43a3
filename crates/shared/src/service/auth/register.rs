use crate::{
    abstract_trait::{
        DynHashing, DynUserCommandRepository, DynUserQueryRepository, RegisterServiceTrait,
    },
    domain::{
        requests::RegisterRequest,
        responses::{ApiResponse, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct RegisterService {
    hash: DynHashing,
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
}

impl RegisterService {
    pub fn new(
        hash: DynHashing,
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
    ) -> Self {
        Self {
            hash,
            query,
            command,
        }
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("📝 Registering user with email: {}", req.email);

        let existing_user = self.query.find_by_email(&req.email).await.map_err(|e| {
            error!("❌ Failed to check email: {e}");
            ServiceError::Repo(e)
        })?;

        if existing_user.is_some() {
            error!("❌ Email already taken: {}", req.email);
            return Err(ServiceError::Conflict("Email already registered".to_string()));
        }

        let password_hash = self.hash.hash_password(&req.password).await?;

        // New accounts always start without the admin flag.
        let user = self.command.create_user(req, &password_hash).await?;

        info!("✅ Registered user {} with id {}", user.email, user.user_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User registered successfully".to_string(),
            data: UserResponse::from(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{UserCommandRepositoryTrait, UserQueryRepositoryTrait},
        config::Hashing,
        errors::RepositoryError,
        model::User,
    };
    use std::sync::Arc;

    struct StubUserQueryRepository {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQueryRepositoryTrait for StubUserQueryRepository {
        async fn find_by_id(&self, _id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(self.user.clone())
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self.user.clone())
        }
    }

    struct StubUserCommandRepository;

    #[async_trait]
    impl UserCommandRepositoryTrait for StubUserCommandRepository {
        async fn create_user(
            &self,
            req: &RegisterRequest,
            password_hash: &str,
        ) -> Result<User, RepositoryError> {
            Ok(User {
                user_id: 1,
                name: req.name.clone(),
                email: req.email.clone(),
                password: password_hash.to_string(),
                is_admin: false,
                created_at: None,
                updated_at: None,
            })
        }
    }

    fn request() -> RegisterRequest {
        RegisterRequest {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            password: "hunter42".into(),
        }
    }

    #[tokio::test]
    async fn test_register_creates_common_user() {
        let service = RegisterService::new(
            Arc::new(Hashing::new()),
            Arc::new(StubUserQueryRepository { user: None }),
            Arc::new(StubUserCommandRepository),
        );

        let response = service.register(&request()).await.unwrap();

        assert_eq!(response.data.email, "jo@example.com");
        assert!(!response.data.is_admin);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let existing = User {
            user_id: 9,
            name: "Jo".into(),
            email: "jo@example.com".into(),
            password: "hash".into(),
            is_admin: false,
            created_at: None,
            updated_at: None,
        };

        let service = RegisterService::new(
            Arc::new(Hashing::new()),
            Arc::new(StubUserQueryRepository {
                user: Some(existing),
            }),
            Arc::new(StubUserCommandRepository),
        );

        let err = service.register(&request()).await.unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
