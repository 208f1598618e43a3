use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{FindAllProducts, MAX_PAGE_SIZE},
    errors::RepositoryError,
    model::{Product, ProductImage},
};
use async_trait::async_trait;
use sqlx::Row;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        info!("🔍 Fetching products page {} with search: {:?}", req.page, req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size.clamp(1, MAX_PAGE_SIZE) as i64;
        let offset = ((req.page - 1).max(0) as i64) * limit;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.as_str())
        };

        let rows = sqlx::query(
            r#"
            SELECT
                p.product_id,
                p.description,
                p.category,
                p.section,
                p.price,
                p.barcode,
                p.initial_stock,
                p.current_stock,
                p.expiry_date,
                p.created_at,
                p.updated_at,
                COUNT(*) OVER() AS total_count
            FROM products p
            WHERE ($1::TEXT IS NULL
                OR p.description ILIKE '%' || $1 || '%'
                OR p.category ILIKE '%' || $1 || '%'
                OR p.section ILIKE '%' || $1 || '%')
            ORDER BY p.product_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows
            .first()
            .map(|r| r.get::<Option<i64>, _>("total_count").unwrap_or(0))
            .unwrap_or(0);

        let products = rows
            .into_iter()
            .map(|r| Product {
                product_id: r.get("product_id"),
                description: r.get("description"),
                category: r.get("category"),
                section: r.get("section"),
                price: r.get("price"),
                barcode: r.get("barcode"),
                initial_stock: r.get("initial_stock"),
                current_stock: r.get("current_stock"),
                expiry_date: r.get("expiry_date"),
                created_at: r.get("created_at"),
                updated_at: r.get("updated_at"),
            })
            .collect();

        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, description, category, section, price, barcode,
                   initial_stock, current_stock, expiry_date, created_at, updated_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(product)
    }

    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, description, category, section, price, barcode,
                   initial_stock, current_stock, expiry_date, created_at, updated_at
            FROM products
            WHERE barcode = $1
            "#,
        )
        .bind(barcode)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(product)
    }

    async fn find_images(&self, product_id: i32) -> Result<Vec<ProductImage>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let images = sqlx::query_as::<_, ProductImage>(
            r#"
            SELECT image_id, product_id, url, created_at
            FROM product_images
            WHERE product_id = $1
            ORDER BY image_id
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(images)
    }

    async fn find_images_for_products(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<ProductImage>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let images = sqlx::query_as::<_, ProductImage>(
            r#"
            SELECT image_id, product_id, url, created_at
            FROM product_images
            WHERE product_id = ANY($1)
            ORDER BY image_id
            "#,
        )
        .bind(product_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(images)
    }
}
