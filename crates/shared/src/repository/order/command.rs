use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    errors::RepositoryError,
    model::{Order, OrderItem, Product},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        info!("🧾 Creating order with {} item(s) for user {user_id}", req.items.len());

        // Order and items are written in one transaction; any failure before
        // commit rolls the whole order back.
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (status, client_id, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING order_id, status, client_id, user_id, created_at, updated_at
            "#,
        )
        .bind(&req.status)
        .bind(req.client_id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        let mut items = Vec::with_capacity(req.items.len());

        for item in &req.items {
            let product = sqlx::query_as::<_, Product>(
                r#"
                SELECT product_id, description, category, section, price, barcode,
                       initial_stock, current_stock, expiry_date, created_at, updated_at
                FROM products
                WHERE product_id = $1
                FOR UPDATE
                "#,
            )
            .bind(item.product_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            let product = product.ok_or_else(|| {
                RepositoryError::ForeignKey(format!(
                    "Product with ID {} not found",
                    item.product_id
                ))
            })?;

            if product.current_stock < item.quantity {
                return Err(RepositoryError::InsufficientStock(format!(
                    "Not enough stock for product ID {} (requested: {}, available: {})",
                    product.product_id, item.quantity, product.current_stock
                )));
            }

            // Price is snapshotted from the product at order time.
            let order_item = sqlx::query_as::<_, OrderItem>(
                r#"
                INSERT INTO orders_items (
                    order_id, product_id, quantity, price, created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
                RETURNING order_item_id, order_id, product_id, quantity, price,
                          created_at, updated_at
                "#,
            )
            .bind(order.order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(product.price)
            .fetch_one(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            sqlx::query(
                r#"
                UPDATE products
                SET current_stock = current_stock - $2,
                    updated_at = CURRENT_TIMESTAMP
                WHERE product_id = $1
                "#,
            )
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

            items.push(order_item);
        }

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit order transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((order, items))
    }

    async fn update_status(&self, req: &UpdateOrderRequest) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status = $2,
                updated_at = CURRENT_TIMESTAMP
            WHERE order_id = $1
            RETURNING order_id, status, client_id, user_id, created_at, updated_at
            "#,
        )
        .bind(req.order_id)
        .bind(&req.status)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        order.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM orders WHERE order_id = $1
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
}
