use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_malformed_email() {
        let req = RegisterRequest {
            name: "Jo".into(),
            email: "not-an-email".into(),
            password: "secret1".into(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_accepts_valid_payload() {
        let req = RegisterRequest {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            password: "secret1".into(),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_login_rejects_short_password() {
        let req = LoginRequest {
            email: "jo@example.com".into(),
            password: "abc".into(),
        };

        assert!(req.validate().is_err());
    }
}
