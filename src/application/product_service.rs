//! Product service: orchestrates normalization, uniqueness checks, CRUD and
//! QR rendering against the injected repository.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::application::dto::ProductResponse;
use crate::domain::code;
use crate::domain::error::ProductError;
use crate::domain::repositories::ProductRepository;
use crate::infrastructure::qr;

pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// All products newest first; a non-blank search term is loosely
    /// normalized and applied as a substring filter on stored codes.
    pub async fn list_products(
        &self,
        search_term: Option<&str>,
    ) -> Result<Vec<ProductResponse>, ProductError> {
        let filter = search_term
            .map(code::normalize_loose)
            .filter(|term| !term.is_empty());
        let products = self.repository.find_all(filter.as_deref()).await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// Absence is not an error here; the endpoint layer decides the 404.
    pub async fn get_product(&self, id: i64) -> Result<Option<ProductResponse>, ProductError> {
        Ok(self
            .repository
            .find_by_id(id)
            .await?
            .map(ProductResponse::from))
    }

    /// Normalize, validate, pre-check uniqueness, insert. The pre-check gives
    /// a friendly error; the store's unique index remains the authoritative
    /// guard when two identical creates race past it.
    pub async fn create_product(&self, raw_code: &str) -> Result<ProductResponse, ProductError> {
        if raw_code.trim().is_empty() {
            return Err(ProductError::blank_code());
        }

        let normalized = code::normalize_strict(raw_code);
        if !code::is_valid(&normalized) {
            return Err(ProductError::malformed_code());
        }

        if self.repository.exists_by_code(&normalized).await? {
            return Err(ProductError::Conflict(normalized));
        }

        let product = self.repository.insert(&normalized, Utc::now()).await?;
        info!(id = product.id, "created product");
        Ok(ProductResponse::from(product))
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ProductError> {
        if self.repository.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }

    /// The product's code rendered as a QR symbol in a PNG byte buffer.
    pub async fn qr_code_png(&self, id: i64) -> Result<Vec<u8>, ProductError> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;
        qr::encode_png(&product.code)
    }
}
