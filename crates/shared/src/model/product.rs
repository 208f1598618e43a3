use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub description: String,
    pub category: Option<String>,
    pub section: Option<String>,
    pub price: Decimal,
    pub barcode: Option<String>,
    pub initial_stock: i32,
    pub current_stock: i32,
    pub expiry_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductImage {
    pub image_id: i32,
    pub product_id: i32,
    pub url: String,
    pub created_at: Option<DateTime<Utc>>,
}
