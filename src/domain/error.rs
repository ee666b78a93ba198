//! Error taxonomy for product operations.
//!
//! The first three variants are deterministic, caller-triggered and map
//! directly onto HTTP 400/409/404. Store-level unique violations are
//! translated into [`ProductError::Conflict`] by the repositories rather
//! than leaking as raw storage errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("product code is already in use: {0}")]
    Conflict(String),

    #[error("no product with id {0}")]
    NotFound(i64),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("qr rendering failed: {0}")]
    QrRender(String),
}

impl ProductError {
    pub fn blank_code() -> Self {
        Self::InvalidInput("product code must not be blank".to_string())
    }

    pub fn malformed_code() -> Self {
        Self::InvalidInput(
            "product code must match xxxxx-xxxxx-xxxxx-xxxxx-xxxxx-xxxxx".to_string(),
        )
    }
}
