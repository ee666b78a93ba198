//! Router-level tests: status codes, headers and payload shapes for every
//! endpoint, driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use product_code_registry::api;
use product_code_registry::application::product_service::ProductService;
use product_code_registry::infrastructure::config::{
    DatabaseConfig, DatabaseProvider, ServerConfig,
};
use product_code_registry::infrastructure::database_connection::DatabaseConnection;

const CANONICAL: &str = "ABCDE-ABCDE-ABCDE-ABCDE-ABCDE-ABCDE";

async fn test_app() -> Router {
    let config = DatabaseConfig {
        provider: DatabaseProvider::Sqlite,
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let connection = DatabaseConnection::connect(&config)
        .await
        .expect("in-memory sqlite connects");
    connection.migrate().await.expect("schema migrates");
    let service = Arc::new(ProductService::new(connection.product_repository()));
    api::router(service, &ServerConfig::default())
}

fn post_product(code: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "code": code }).to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn create_returns_201_with_location_and_normalized_code() {
    let app = test_app().await;

    let response = app
        .oneshot(post_product("abcde abcde abcde abcde abcde abcde"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("location header present")
        .to_str()
        .expect("location is ascii")
        .to_string();
    let body = body_json(response).await;
    assert_eq!(body["code"], CANONICAL);
    assert_eq!(location, format!("/api/products/{}", body["id"]));
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn create_rejects_malformed_and_duplicate_codes() {
    let app = test_app().await;

    let invalid = app
        .clone()
        .oneshot(post_product("INVALID-CODE"))
        .await
        .expect("request succeeds");
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(invalid).await["message"].is_string());

    let first = app
        .clone()
        .oneshot(post_product(CANONICAL))
        .await
        .expect("request succeeds");
    assert_eq!(first.status(), StatusCode::CREATED);

    let duplicate = app
        .oneshot(post_product(CANONICAL))
        .await
        .expect("request succeeds");
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn get_by_id_round_trips_and_unknown_ids_are_404() {
    let app = test_app().await;

    let created = app
        .clone()
        .oneshot(post_product(CANONICAL))
        .await
        .expect("request succeeds");
    let id = body_json(created).await["id"].as_i64().expect("id is an integer");

    let found = app
        .clone()
        .oneshot(get(&format!("/api/products/{id}")))
        .await
        .expect("request succeeds");
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(body_json(found).await["code"], CANONICAL);

    let missing = app
        .oneshot(get("/api/products/4242"))
        .await
        .expect("request succeeds");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_supports_search() {
    let app = test_app().await;

    for code in [CANONICAL, "ZZZZZ-ZZZZZ-ZZZZZ-ZZZZZ-ZZZZZ-ZZZZZ"] {
        let response = app
            .clone()
            .oneshot(post_product(code))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let all = app
        .clone()
        .oneshot(get("/api/products"))
        .await
        .expect("request succeeds");
    assert_eq!(all.status(), StatusCode::OK);
    assert_eq!(body_json(all).await.as_array().expect("array body").len(), 2);

    let filtered = app
        .oneshot(get("/api/products?search=zzzzz"))
        .await
        .expect("request succeeds");
    let body = body_json(filtered).await;
    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["code"], "ZZZZZ-ZZZZZ-ZZZZZ-ZZZZZ-ZZZZZ-ZZZZZ");
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let app = test_app().await;

    let created = app
        .clone()
        .oneshot(post_product(CANONICAL))
        .await
        .expect("request succeeds");
    let id = body_json(created).await["id"].as_i64().expect("id is an integer");

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/api/products/{id}"))
        .body(Body::empty())
        .expect("request builds");
    let deleted = app.clone().oneshot(delete).await.expect("request succeeds");
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let again = Request::builder()
        .method("DELETE")
        .uri(format!("/api/products/{id}"))
        .body(Body::empty())
        .expect("request builds");
    let missing = app.oneshot(again).await.expect("request succeeds");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn qr_endpoint_serves_png_bytes() {
    let app = test_app().await;

    let created = app
        .clone()
        .oneshot(post_product(CANONICAL))
        .await
        .expect("request succeeds");
    let id = body_json(created).await["id"].as_i64().expect("id is an integer");

    let response = app
        .clone()
        .oneshot(get(&format!("/api/products/{id}/qr")))
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).expect("content type"),
        "image/png"
    );
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    assert_eq!(&bytes[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

    let missing = app
        .oneshot(get("/api/products/4242/qr"))
        .await
        .expect("request succeeds");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = test_app().await;

    let response = app
        .oneshot(get("/api-docs/openapi.json"))
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["paths"]["/api/products"].is_object());
    assert!(body["paths"]["/api/products/{id}/qr"].is_object());
}
