//! Book persistence: the `BookStore` seam and its PostgreSQL implementation.

use crate::config::DatabaseConfig;
use crate::error::StoreError;
use crate::model::{Book, NewBook};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Storage handle injected into every handler. Implementations must be safe
/// for concurrent use; callers add no locking of their own.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert one row; the store assigns the id.
    async fn create(&self, book: &NewBook) -> Result<Book, StoreError>;

    /// Hard delete by id. Returns rows affected; zero is not an error.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;

    /// Exactly one row, or [`StoreError::NotFound`].
    async fn get(&self, id: i64) -> Result<Book, StoreError>;

    /// Every row, unfiltered and in no particular order.
    async fn list(&self) -> Result<Vec<Book>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

const COLUMNS: &str = "id, author, title, publisher, created_at, updated_at";

#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn create(&self, book: &NewBook) -> Result<Book, StoreError> {
        let sql = format!(
            "INSERT INTO books (author, title, publisher) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(&book.author)
            .bind(&book.title)
            .bind(&book.publisher)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let sql = "DELETE FROM books WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn get(&self, id: i64) -> Result<Book, StoreError> {
        let sql = format!("SELECT {} FROM books WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let sql = format!("SELECT {} FROM books", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Book>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Open a connection pool from discrete connection parameters.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "connecting to database"
    );
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
}
