//! sqlx-backed implementations of the product store.
//!
//! The substring filter uses `instr`/`strpos` instead of `LIKE` so matching
//! stays byte-wise case-sensitive on both backends and filter text cannot
//! smuggle in wildcards.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, SqlitePool};

use crate::domain::error::ProductError;
use crate::domain::product::Product;
use crate::domain::repositories::ProductRepository;

#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_all(&self, code_filter: Option<&str>) -> Result<Vec<Product>, ProductError> {
        let products = match code_filter {
            Some(filter) => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, code, created_at FROM products \
                     WHERE instr(code, ?) > 0 \
                     ORDER BY created_at DESC, id DESC",
                )
                .bind(filter)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, code, created_at FROM products \
                     ORDER BY created_at DESC, id DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductError> {
        let product =
            sqlx::query_as::<_, Product>("SELECT id, code, created_at FROM products WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(product)
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, ProductError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE code = ?")
            .bind(code)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn insert(
        &self,
        code: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Product, ProductError> {
        let result = sqlx::query("INSERT INTO products (code, created_at) VALUES (?, ?)")
            .bind(code)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(|error| map_unique_violation(error, code))?;

        Ok(Product {
            id: result.last_insert_rowid(),
            code: code.to_string(),
            created_at,
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ProductError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self, code_filter: Option<&str>) -> Result<Vec<Product>, ProductError> {
        let products = match code_filter {
            Some(filter) => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, code, created_at FROM products \
                     WHERE strpos(code, $1) > 0 \
                     ORDER BY created_at DESC, id DESC",
                )
                .bind(filter)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, code, created_at FROM products \
                     ORDER BY created_at DESC, id DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductError> {
        let product =
            sqlx::query_as::<_, Product>("SELECT id, code, created_at FROM products WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(product)
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool, ProductError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE code = $1)")
                .bind(code)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn insert(
        &self,
        code: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Product, ProductError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (code, created_at) VALUES ($1, $2) \
             RETURNING id, code, created_at",
        )
        .bind(code)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| map_unique_violation(error, code))?;

        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ProductError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// The service pre-checks uniqueness, but the unique index is the safety net
/// when concurrent creates race past that check.
fn map_unique_violation(error: sqlx::Error, code: &str) -> ProductError {
    match &error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            ProductError::Conflict(code.to_string())
        }
        _ => ProductError::Storage(error),
    }
}
