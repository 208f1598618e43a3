use crate::{
    abstract_trait::ClientQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{FindAllClients, MAX_PAGE_SIZE},
    errors::RepositoryError,
    model::Client,
};
use async_trait::async_trait;
use sqlx::Row;
use tracing::{error, info};

#[derive(Clone)]
pub struct ClientQueryRepository {
    db: ConnectionPool,
}

impl ClientQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientQueryRepositoryTrait for ClientQueryRepository {
    async fn find_all(&self, req: &FindAllClients) -> Result<(Vec<Client>, i64), RepositoryError> {
        info!("🔍 Fetching clients page {} with search: {:?}", req.page, req.search);

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
                c.client_id,
                c.name,
                c.email,
                c.tax_id,
                c.created_by,
                c.created_at,
                c.updated_at,
                COUNT(*) OVER() AS total_count
            FROM clients c
            WHERE ($1::TEXT IS NULL OR c.name ILIKE '%' || $1 || '%' OR c.email ILIKE '%' || $1 || '%')
            ORDER BY c.client_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch clients: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows
            .first()
            .map(|r| r.get::<Option<i64>, _>("total_count").unwrap_or(0))
            .unwrap_or(0);

        let clients = rows
            .into_iter()
            .map(|r| Client {
                client_id: r.get("client_id"),
                name: r.get("name"),
                email: r.get("email"),
                tax_id: r.get("tax_id"),
                created_by: r.get("created_by"),
                created_at: r.get("created_at"),
                updated_at: r.get("updated_at"),
            })
            .collect();

        Ok((clients, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Client>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT client_id, name, email, tax_id, created_by, created_at, updated_at
            FROM clients
            WHERE client_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(client)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Client>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT client_id, name, email, tax_id, created_by, created_at, updated_at
            FROM clients
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(client)
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Client>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT client_id, name, email, tax_id, created_by, created_at, updated_at
            FROM clients
            WHERE tax_id = $1
            "#,
        )
        .bind(tax_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(client)
    }
}
