//! The product entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered product code.
///
/// `code` is always in canonical form for persisted rows and is immutable
/// after creation; there is no update operation. The store owns `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub code: String,
    pub created_at: DateTime<Utc>,
}
