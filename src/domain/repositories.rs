//! Repository interface for durable product storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::error::ProductError;
use crate::domain::product::Product;

/// Durable storage of products with a uniqueness constraint on `code`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered newest first. When a filter is given, only rows
    /// whose code contains it as a case-sensitive substring are returned.
    async fn find_all(&self, code_filter: Option<&str>) -> Result<Vec<Product>, ProductError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductError>;

    async fn exists_by_code(&self, code: &str) -> Result<bool, ProductError>;

    /// Persist a new product, letting the store assign the id. A unique-index
    /// violation surfaces as [`ProductError::Conflict`].
    async fn insert(&self, code: &str, created_at: DateTime<Utc>)
    -> Result<Product, ProductError>;

    /// Returns true iff a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ProductError>;
}
