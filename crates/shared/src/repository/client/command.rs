use crate::{
    abstract_trait::ClientCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateClientRequest, UpdateClientRequest},
    errors::RepositoryError,
    model::Client,
};
use async_trait::async_trait;

pub struct ClientCommandRepository {
    db: ConnectionPool,
}

impl ClientCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientCommandRepositoryTrait for ClientCommandRepository {
    async fn create(
        &self,
        req: &CreateClientRequest,
        created_by: i32,
    ) -> Result<Client, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, email, tax_id, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING client_id, name, email, tax_id, created_by, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.tax_id)
        .bind(created_by)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(client)
    }

    async fn update(&self, req: &UpdateClientRequest) -> Result<Client, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Absent fields keep their stored values.
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                tax_id = COALESCE($4, tax_id),
                updated_at = CURRENT_TIMESTAMP
            WHERE client_id = $1
            RETURNING client_id, name, email, tax_id, created_by, created_at, updated_at
            "#,
        )
        .bind(req.client_id)
        .bind(req.name.as_deref())
        .bind(req.email.as_deref())
        .bind(req.tax_id.as_deref())
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        client.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM clients WHERE client_id = $1
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
