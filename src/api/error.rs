//! Maps service errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use crate::domain::error::ProductError;

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ProductError::InvalidInput(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ProductError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            ProductError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ProductError::Storage(_) | ProductError::QrRender(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
