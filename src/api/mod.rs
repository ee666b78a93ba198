//! HTTP endpoint layer: routing, CORS, request tracing and the OpenAPI
//! document. Handlers stay thin; service errors carry their own status
//! mapping (see `error`).

mod error;
mod products;

use std::sync::Arc;

use axum::{Json, Router, http::HeaderValue, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::application::dto::{CreateProductRequest, ProductResponse};
use crate::application::product_service::ProductService;
use crate::infrastructure::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProductService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        products::list_products,
        products::get_product,
        products::create_product,
        products::delete_product,
        products::product_qr,
    ),
    components(schemas(CreateProductRequest, ProductResponse))
)]
struct ApiDoc;

pub fn router(service: Arc<ProductService>, config: &ServerConfig) -> Router {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/{id}",
            get(products::get_product).delete(products::delete_product),
        )
        .route("/api/products/{id}/qr", get(products::product_qr))
        .route("/api-docs/openapi.json", get(openapi_doc))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service })
}

async fn openapi_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
