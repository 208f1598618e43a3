use crate::{
    abstract_trait::{DynJwtService, DynUserQueryRepository, TokenServiceTrait},
    domain::{
        requests::RefreshTokenRequest,
        responses::{ApiResponse, RefreshTokenResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct TokenService {
    jwt: DynJwtService,
    query: DynUserQueryRepository,
}

impl TokenService {
    pub fn new(jwt: DynJwtService, query: DynUserQueryRepository) -> Self {
        Self { jwt, query }
    }
}

#[async_trait]
impl TokenServiceTrait for TokenService {
    async fn refresh(
        &self,
        req: &RefreshTokenRequest,
    ) -> Result<ApiResponse<RefreshTokenResponse>, ServiceError> {
        let claims = self.jwt.verify_token(&req.refresh_token, "refresh")?;

        // The account may have been deleted (or promoted) since the refresh
        // token was minted, so the user is re-read instead of trusted.
        let user = match self.query.find_by_id(claims.user_id as i32).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                error!("❌ Refresh rejected, user {} no longer exists", claims.user_id);
                return Err(ServiceError::InvalidCredentials);
            }
            Err(err) => {
                error!("❌ Failed to query user for refresh: {err}");
                return Err(ServiceError::Repo(err));
            }
        };

        let access_token = self
            .jwt
            .generate_token(user.user_id as i64, user.is_admin, "access")?;

        info!("✅ Issued new access token for user {}", user.user_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Token refreshed successfully".to_string(),
            data: RefreshTokenResponse { access_token },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{JwtServiceTrait, UserQueryRepositoryTrait},
        config::JwtConfig,
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

    fn stored_user() -> User {
        User {
            user_id: 42,
            name: "Jo".into(),
            email: "jo@example.com".into(),
            password: "hash".into(),
            is_admin: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_refresh_issues_new_access_token() {
        let jwt = Arc::new(JwtConfig::new("test-secret"));
        let service = TokenService::new(
            jwt.clone(),
            Arc::new(StubUserQueryRepository {
                user: Some(stored_user()),
            }),
        );

        let refresh_token = jwt.generate_token(42, true, "refresh").unwrap();
        let response = service
            .refresh(&RefreshTokenRequest { refresh_token })
            .await
            .unwrap();

        let claims = jwt
            .verify_token(&response.data.access_token, "access")
            .unwrap();
        assert_eq!(claims.user_id, 42);
        assert!(claims.is_admin);
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let jwt = Arc::new(JwtConfig::new("test-secret"));
        let service = TokenService::new(
            jwt.clone(),
            Arc::new(StubUserQueryRepository {
                user: Some(stored_user()),
            }),
        );

        let access_token = jwt.generate_token(42, true, "access").unwrap();
        let err = service
            .refresh(&RefreshTokenRequest {
                refresh_token: access_token,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidTokenType));
    }

    #[tokio::test]
    async fn test_refresh_rejects_deleted_user() {
        let jwt = Arc::new(JwtConfig::new("test-secret"));
        let service = TokenService::new(
            jwt.clone(),
            Arc::new(StubUserQueryRepository { user: None }),
        );

        let refresh_token = jwt.generate_token(42, false, "refresh").unwrap();
        let err = service
            .refresh(&RefreshTokenRequest { refresh_token })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}
