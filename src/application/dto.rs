//! Data transfer objects for the product endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product::Product;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    /// Raw user-entered code; normalized by the service before validation.
    #[schema(example = "ABCDE-FGHIJ-KLMNO-PQRST-UVWXY-Z1234")]
    pub code: String,
}

/// External read projection of a product. Non-lossy: every entity field is
/// exposed, nothing else.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub code: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            code: product.code,
            created_at: product.created_at,
        }
    }
}
