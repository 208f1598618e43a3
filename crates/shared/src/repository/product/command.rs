use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::{Product, ProductImage},
};
use async_trait::async_trait;
use tracing::info;

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (
                description, category, section, price, barcode,
                initial_stock, current_stock, expiry_date, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING product_id, description, category, section, price, barcode,
                      initial_stock, current_stock, expiry_date, created_at, updated_at
            "#,
        )
        .bind(&req.description)
        .bind(req.category.as_deref())
        .bind(req.section.as_deref())
        .bind(req.price)
        .bind(req.barcode.as_deref())
        .bind(req.initial_stock)
        .bind(req.current_stock)
        .bind(req.expiry_date)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(product)
    }

    async fn update(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Absent fields keep their stored values.
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET description = COALESCE($2, description),
                category = COALESCE($3, category),
                section = COALESCE($4, section),
                price = COALESCE($5, price),
                barcode = COALESCE($6, barcode),
                initial_stock = COALESCE($7, initial_stock),
                current_stock = COALESCE($8, current_stock),
                expiry_date = COALESCE($9, expiry_date),
                updated_at = CURRENT_TIMESTAMP
            WHERE product_id = $1
            RETURNING product_id, description, category, section, price, barcode,
                      initial_stock, current_stock, expiry_date, created_at, updated_at
            "#,
        )
        .bind(req.product_id)
        .bind(req.description.as_deref())
        .bind(req.category.as_deref())
        .bind(req.section.as_deref())
        .bind(req.price)
        .bind(req.barcode.as_deref())
        .bind(req.initial_stock)
        .bind(req.current_stock)
        .bind(req.expiry_date)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        product.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM products WHERE product_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn add_images(
        &self,
        product_id: i32,
        urls: &[String],
    ) -> Result<Vec<ProductImage>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let mut created = Vec::with_capacity(urls.len());

        for url in urls {
            // URLs already attached to this product are skipped rather than duplicated.
            let image = sqlx::query_as::<_, ProductImage>(
                r#"
                INSERT INTO product_images (product_id, url, created_at)
                SELECT $1, $2, CURRENT_TIMESTAMP
                WHERE NOT EXISTS (
                    SELECT 1 FROM product_images WHERE product_id = $1 AND url = $2
                )
                RETURNING image_id, product_id, url, created_at
                "#,
            )
            .bind(product_id)
            .bind(url)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            match image {
                Some(image) => created.push(image),
                None => info!("🖼️ Skipping duplicate image url for product {product_id}"),
            }
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(created)
    }

    async fn delete_image(&self, image_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM product_images WHERE image_id = $1
            "#,
        )
        .bind(image_id)
        .execute(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
