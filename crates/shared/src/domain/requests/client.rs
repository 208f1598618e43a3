use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllClients {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(equal = 11, message = "Tax id must be exactly 11 characters"))]
    pub tax_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateClientRequest {
    #[serde(skip_deserializing)]
    pub client_id: Option<i32>,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(equal = 11, message = "Tax id must be exactly 11 characters"))]
    pub tax_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_rejects_short_tax_id() {
        let req = CreateClientRequest {
            name: "Acme".into(),
            email: "acme@example.com".into(),
            tax_id: "123".into(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_client_skips_absent_fields() {
        let req = UpdateClientRequest {
            client_id: Some(1),
            name: None,
            email: None,
            tax_id: None,
        };

        assert!(req.validate().is_ok());
    }
}
