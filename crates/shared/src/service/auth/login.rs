use crate::{
    abstract_trait::{DynHashing, DynJwtService, DynUserQueryRepository, LoginServiceTrait},
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, TokenResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct LoginService {
    hash: DynHashing,
    jwt: DynJwtService,
    query: DynUserQueryRepository,
}

impl LoginService {
    pub fn new(hash: DynHashing, jwt: DynJwtService, query: DynUserQueryRepository) -> Self {
        Self { hash, jwt, query }
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("🔐 Attempting login for email: {}", req.email);

        // Unknown email and bad password get the same answer.
        let user = match self.query.find_by_email(&req.email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                error!("❌ Login failed, email not registered: {}", req.email);
                return Err(ServiceError::InvalidCredentials);
            }
            Err(err) => {
                error!("❌ Failed to query user: {err}");
                return Err(ServiceError::Repo(err));
            }
        };

        self.hash
            .compare_password(&user.password, &req.password)
            .await
            .map_err(|err| {
                error!("❌ Invalid password for email: {}", req.email);
                match err {
                    ServiceError::InvalidCredentials => ServiceError::InvalidCredentials,
                    other => other,
                }
            })?;

        let access_token = self
            .jwt
            .generate_token(user.user_id as i64, user.is_admin, "access")?;
        let refresh_token = self
            .jwt
            .generate_token(user.user_id as i64, user.is_admin, "refresh")?;

        info!("✅ Login successful for email: {}", req.email);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Login successful".to_string(),
            data: TokenResponse {
                access_token,
                refresh_token,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{JwtServiceTrait, UserQueryRepositoryTrait},
        config::{Hashing, JwtConfig},
        errors::RepositoryError,
        model::User,
    };
    use bcrypt::hash;
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

    fn service_with(user: Option<User>) -> LoginService {
        LoginService::new(
            Arc::new(Hashing::new()),
            Arc::new(JwtConfig::new("test-secret")),
            Arc::new(StubUserQueryRepository { user }),
        )
    }

    fn stored_user(is_admin: bool) -> User {
        User {
            user_id: 42,
            name: "Jo".into(),
            email: "jo@example.com".into(),
            password: hash("hunter42", 4).unwrap(),
            is_admin,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_login_issues_tokens_with_stored_identity() {
        let service = service_with(Some(stored_user(true)));

        let response = service
            .login(&LoginRequest {
                email: "jo@example.com".into(),
                password: "hunter42".into(),
            })
            .await
            .unwrap();

        let jwt = JwtConfig::new("test-secret");
        let claims = jwt
            .verify_token(&response.data.access_token, "access")
            .unwrap();
        assert_eq!(claims.user_id, 42);
        assert!(claims.is_admin);

        let refresh_claims = jwt
            .verify_token(&response.data.refresh_token, "refresh")
            .unwrap();
        assert_eq!(refresh_claims.user_id, 42);
    }

    #[tokio::test]
    async fn test_login_unknown_email_yields_invalid_credentials() {
        let service = service_with(None);

        let err = service
            .login(&LoginRequest {
                email: "ghost@example.com".into(),
                password: "hunter42".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_wrong_password_yields_invalid_credentials() {
        let service = service_with(Some(stored_user(false)));

        let err = service
            .login(&LoginRequest {
                email: "jo@example.com".into(),
                password: "wrong-password".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}
