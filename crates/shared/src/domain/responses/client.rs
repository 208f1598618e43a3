use crate::model::Client;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ClientResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub tax_id: String,
    pub created_by: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Client> for ClientResponse {
    fn from(value: Client) -> Self {
        ClientResponse {
            id: value.client_id,
            name: value.name,
            email: value.email,
            tax_id: value.tax_id,
            created_by: value.created_by,
            created_at: value.created_at.map(|dt| dt.to_rfc3339()),
            updated_at: value.updated_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
