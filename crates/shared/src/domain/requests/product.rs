use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
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

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("price_negative"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub category: Option<String>,

    pub section: Option<String>,

    #[validate(custom(function = "validate_price", message = "Price must not be negative"))]
    pub price: Decimal,

    #[validate(length(max = 255, message = "Barcode must be at most 255 characters"))]
    pub barcode: Option<String>,

    #[validate(range(min = 0, message = "Initial stock must not be negative"))]
    pub initial_stock: i32,

    #[validate(range(min = 0, message = "Current stock must not be negative"))]
    pub current_stock: i32,

    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(skip_deserializing)]
    pub product_id: Option<i32>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,

    pub category: Option<String>,

    pub section: Option<String>,

    #[validate(custom(function = "validate_price", message = "Price must not be negative"))]
    pub price: Option<Decimal>,

    #[validate(length(max = 255, message = "Barcode must be at most 255 characters"))]
    pub barcode: Option<String>,

    #[validate(range(min = 0, message = "Initial stock must not be negative"))]
    pub initial_stock: Option<i32>,

    #[validate(range(min = 0, message = "Current stock must not be negative"))]
    pub current_stock: Option<i32>,

    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductImageRequest {
    #[validate(url(message = "Invalid image URL"))]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddProductImagesRequest {
    #[validate(length(min = 1, message = "At least one image is required"), nested)]
    pub images: Vec<CreateProductImageRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateProductRequest {
        CreateProductRequest {
            description: "Linen shirt".into(),
            category: Some("Apparel".into()),
            section: Some("Menswear".into()),
            price: Decimal::new(5990, 2),
            barcode: Some("7891234567890".into()),
            initial_stock: 10,
            current_stock: 10,
            expiry_date: None,
        }
    }

    #[test]
    fn test_create_product_accepts_valid_payload() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn test_create_product_rejects_negative_price() {
        let mut req = base_request();
        req.price = Decimal::new(-100, 2);

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_add_images_rejects_empty_list() {
        let req = AddProductImagesRequest { images: vec![] };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_add_images_rejects_bad_url() {
        let req = AddProductImagesRequest {
            images: vec![CreateProductImageRequest {
                url: "not a url".into(),
            }],
        };

        assert!(req.validate().is_err());
    }
}
