use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllOrders {
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

fn default_status() -> String {
    "PENDING".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderItemRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 3)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(default = "default_status")]
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,

    pub client_id: Option<i32>,

    #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
    pub items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    #[serde(skip_deserializing)]
    pub order_id: Option<i32>,

    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_rejects_empty_items() {
        let req = CreateOrderRequest {
            status: "PENDING".into(),
            client_id: None,
            items: vec![],
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_order_rejects_zero_quantity() {
        let req = CreateOrderRequest {
            status: "PENDING".into(),
            client_id: Some(1),
            items: vec![CreateOrderItemRequest {
                product_id: 1,
                quantity: 0,
            }],
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_order_defaults_status_to_pending() {
        let req: CreateOrderRequest =
            serde_json::from_str(r#"{"items": [{"product_id": 1, "quantity": 2}]}"#).unwrap();

        assert_eq!(req.status, "PENDING");
        assert!(req.validate().is_ok());
    }
}
