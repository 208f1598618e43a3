use crate::model::{Product, ProductImage};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductImageResponse {
    pub id: i32,
    pub product_id: i32,
    pub url: String,
    pub created_at: Option<String>,
}

impl From<ProductImage> for ProductImageResponse {
    fn from(value: ProductImage) -> Self {
        ProductImageResponse {
            id: value.image_id,
            product_id: value.product_id,
            url: value.url,
            created_at: value.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub description: String,
    pub category: Option<String>,
    pub section: Option<String>,
    pub price: Decimal,
    pub barcode: Option<String>,
    pub initial_stock: i32,
    pub current_stock: i32,
    pub expiry_date: Option<NaiveDate>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub images: Vec<ProductImageResponse>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            description: value.description,
            category: value.category,
            section: value.section,
            price: value.price,
            barcode: value.barcode,
            initial_stock: value.initial_stock,
            current_stock: value.current_stock,
            expiry_date: value.expiry_date,
            created_at: value.created_at.map(|dt| dt.to_rfc3339()),
            updated_at: value.updated_at.map(|dt| dt.to_rfc3339()),
            images: Vec::new(),
        }
    }
}

pub fn to_product_response(product: Product, images: Vec<ProductImage>) -> ProductResponse {
    let mut response = ProductResponse::from(product);
    response.images = images.into_iter().map(ProductImageResponse::from).collect();
    response
}
