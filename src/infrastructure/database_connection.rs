//! Database pool construction and schema setup.
//!
//! The store backend is selected by configuration: a file-based SQLite
//! database (bootstrapped on first run) or a PostgreSQL server. Both expose
//! the same [`ProductRepository`] interface.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use sqlx::{PgPool, SqlitePool, postgres::PgPoolOptions, sqlite::SqlitePoolOptions};

use crate::domain::repositories::ProductRepository;
use crate::infrastructure::config::{DatabaseConfig, DatabaseProvider};
use crate::infrastructure::product_repository::{
    PostgresProductRepository, SqliteProductRepository,
};

const SQLITE_SCHEMA: &str = r"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        code VARCHAR(35) NOT NULL UNIQUE,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
";

const POSTGRES_SCHEMA: &str = r"
    CREATE TABLE IF NOT EXISTS products (
        id BIGSERIAL PRIMARY KEY,
        code VARCHAR(35) NOT NULL UNIQUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
";

pub enum DatabaseConnection {
    Sqlite(SqlitePool),
    Postgres(PgPool),
}

impl DatabaseConnection {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        match config.provider {
            DatabaseProvider::Sqlite => {
                ensure_sqlite_file(&config.url).await?;
                let pool = SqlitePoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(&config.url)
                    .await?;
                Ok(Self::Sqlite(pool))
            }
            DatabaseProvider::Postgres => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(&config.url)
                    .await?;
                Ok(Self::Postgres(pool))
            }
        }
    }

    /// Create the products table when missing. The unique constraint on
    /// `code` is the authoritative duplicate guard for concurrent creates.
    pub async fn migrate(&self) -> Result<()> {
        match self {
            Self::Sqlite(pool) => {
                sqlx::query(SQLITE_SCHEMA).execute(pool).await?;
            }
            Self::Postgres(pool) => {
                sqlx::query(POSTGRES_SCHEMA).execute(pool).await?;
            }
        }
        Ok(())
    }

    pub fn product_repository(&self) -> Arc<dyn ProductRepository> {
        match self {
            Self::Sqlite(pool) => Arc::new(SqliteProductRepository::new(pool.clone())),
            Self::Postgres(pool) => Arc::new(PostgresProductRepository::new(pool.clone())),
        }
    }
}

/// Create the SQLite database file (and parent directories) if needed, so a
/// fresh deployment starts without manual setup. In-memory URLs are left
/// untouched.
async fn ensure_sqlite_file(database_url: &str) -> Result<()> {
    let db_path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");

    if db_path.is_empty() || db_path.starts_with(':') {
        return Ok(());
    }

    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    if !Path::new(db_path).exists() {
        tokio::fs::File::create(db_path).await?;
    }
    Ok(())
}
