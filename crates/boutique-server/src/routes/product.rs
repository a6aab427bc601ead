//! Product Routes - Catalog Resource
//!
//! HTTP handlers that classify each request into a ProductOperation and map
//! the outcome onto the status-code contract:
//! 200 (found or `null`), 201 (created), 204 (deleted), 405, 422, 500.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use boutique::DomainError;

use crate::application::{ProductOperation, ProductOutcome};
use crate::models::{CreateProductRequest, ProductQuery, ProductResponse};
use crate::AppState;

type HttpError = (StatusCode, String);

/// Get Product by ID
#[utoipa::path(
    get,
    path = "/api/product",
    params(ProductQuery),
    responses(
        (
            status = 200,
            description = "Product found, or `null` when no product has this ID",
            body = ProductResponse
        ),
        (status = 500, description = "Internal server error")
    ),
    tag = "Product"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<ProductOutcome, HttpError> {
    let id = ProductQuery::from_pairs(pairs).into_id();
    dispatch(&state, ProductOperation::Get { id }).await
}

/// Create new Product
#[utoipa::path(
    post,
    path = "/api/product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 422, description = "Product missing one or more fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Product"
)]
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ProductOutcome, HttpError> {
    // A body that is not JSON carries no fields
    let payload = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    dispatch(&state, ProductOperation::Create { payload }).await
}

/// Delete Product
#[utoipa::path(
    delete,
    path = "/api/product",
    params(ProductQuery),
    responses(
        (status = 204, description = "Product deleted, or no product had this ID"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Product"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<ProductOutcome, HttpError> {
    let id = ProductQuery::from_pairs(pairs).into_id();
    dispatch(&state, ProductOperation::Delete { id }).await
}

/// List all Products
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All Products in store order", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Product"
)]
pub async fn list_products(State(state): State<AppState>) -> Result<ProductOutcome, HttpError> {
    dispatch(&state, ProductOperation::List).await
}

/// Any method the catalog paths do not route
pub async fn method_not_allowed(
    State(state): State<AppState>,
    method: Method,
) -> Result<ProductOutcome, HttpError> {
    dispatch(
        &state,
        ProductOperation::Unsupported {
            method: method.to_string(),
        },
    )
    .await
}

async fn dispatch(
    state: &AppState,
    operation: ProductOperation,
) -> Result<ProductOutcome, HttpError> {
    state
        .product_service
        .handle(operation)
        .await
        .map_err(into_http_error)
}

fn into_http_error(err: DomainError) -> HttpError {
    match err {
        DomainError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
        DomainError::UnsupportedMethod(_) => (StatusCode::METHOD_NOT_ALLOWED, err.to_string()),
        DomainError::Repository(_) => {
            tracing::error!("Product store failure: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

impl IntoResponse for ProductOutcome {
    fn into_response(self) -> Response {
        match self {
            ProductOutcome::Found(product) => {
                Json(product.map(ProductResponse::from)).into_response()
            }
            ProductOutcome::Listed(products) => Json(
                products
                    .into_iter()
                    .map(ProductResponse::from)
                    .collect::<Vec<_>>(),
            )
            .into_response(),
            ProductOutcome::Created(product) => {
                (StatusCode::CREATED, Json(ProductResponse::from(product))).into_response()
            }
            ProductOutcome::Deleted => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/product",
            get(get_product)
                .post(create_product)
                .delete(delete_product)
                // HEAD would otherwise be answered by the GET handler
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/products",
            get(list_products)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryProductRepository;
    use crate::build_router;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use boutique::{NewProduct, Product, ProductRepository};
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app() -> Router {
        build_router(AppState::new(Arc::new(InMemoryProductRepository::new())))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, String) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn chair(price: Value) -> Value {
        json!({
            "name": "Chair",
            "price": price,
            "description": "Oak chair",
            "mediaUrl": "http://x/chair.png"
        })
    }

    struct UnreachableStore;

    #[async_trait]
    impl ProductRepository for UnreachableStore {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Product>, DomainError> {
            Err(DomainError::Repository("timed out".to_string()))
        }

        async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
            Err(DomainError::Repository("timed out".to_string()))
        }

        async fn create(&self, _product: &NewProduct) -> Result<Product, DomainError> {
            Err(DomainError::Repository("timed out".to_string()))
        }

        async fn delete_by_id(&self, _id: Uuid) -> Result<bool, DomainError> {
            Err(DomainError::Repository("timed out".to_string()))
        }
    }

    #[tokio::test]
    async fn test_create_delete_get_scenario() {
        let app = app();

        let (status, body) = send(&app, "POST", "/api/product", Some(chair(json!(49.99)))).await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(created["name"], "Chair");
        assert_eq!(created["price"], 49.99);
        assert_eq!(created["description"], "Oak chair");
        assert_eq!(created["mediaUrl"], "http://x/chair.png");
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let (status, body) = send(&app, "GET", &format!("/api/product?id={}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        let found: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(found, created);

        let (status, body) = send(&app, "DELETE", &format!("/api/product?id={}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, body) = send(&app, "GET", &format!("/api/product?id={}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "null");
    }

    #[tokio::test]
    async fn test_zero_price_is_unprocessable() {
        let app = app();
        let (status, body) = send(&app, "POST", "/api/product", Some(chair(json!(0)))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, "Product missing one or more fields");
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let app = app();
        for key in ["name", "price", "description", "mediaUrl"] {
            let mut payload = chair(json!(10));
            payload.as_object_mut().unwrap().remove(key);
            let (status, _) = send(&app, "POST", "/api/product", Some(payload)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "missing {}", key);
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_unprocessable() {
        let app = app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/product")
            .body(Body::from("name=Chair"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_put_is_method_not_allowed() {
        let app = app();
        let (status, body) = send(&app, "PUT", "/api/product", Some(chair(json!(1)))).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, "Method PUT not allowed");

        let (status, body) = send(&app, "PATCH", "/api/product", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, "Method PATCH not allowed");

        for uri in ["/api/product", "/api/products"] {
            let (status, _) = send(&app, "HEAD", uri, None).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "HEAD {}", uri);
        }
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_no_content() {
        let app = app();
        let uri = format!("/api/product?id={}", Uuid::new_v4());
        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "DELETE", "/api/product", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_repeated_id_parameter_uses_first_value() {
        let app = app();
        let (_, body) = send(&app, "POST", "/api/product", Some(chair(json!(7)))).await;
        let created: Value = serde_json::from_str(&body).unwrap();
        let id = created["id"].as_str().unwrap();

        let uri = format!("/api/product?id={}&id=b", id);
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let found: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(found["id"], created["id"]);

        let (status, body) = send(&app, "GET", "/api/product?id=a&id=b", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "null");

        let (status, _) = send(&app, "DELETE", "/api/product?id=a&id=b", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, body) = send(&app, "GET", &format!("/api/product?id={}", id), None).await;
        assert_eq!(body, "null");
    }

    #[tokio::test]
    async fn test_legacy_id_parameter() {
        let app = app();
        let (_, body) = send(&app, "POST", "/api/product", Some(chair(json!(5)))).await;
        let created: Value = serde_json::from_str(&body).unwrap();
        let id = created["id"].as_str().unwrap();

        let (status, body) = send(&app, "GET", &format!("/api/product?_id={}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        let found: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(found["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_list_products() {
        let app = app();
        let (status, body) = send(&app, "GET", "/api/products", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");

        let mut ids = Vec::new();
        for price in [1, 2, 3] {
            let (_, body) = send(&app, "POST", "/api/product", Some(chair(json!(price)))).await;
            let created: Value = serde_json::from_str(&body).unwrap();
            ids.push(created["id"].clone());
        }

        let (status, body) = send(&app, "GET", "/api/products", None).await;
        assert_eq!(status, StatusCode::OK);
        let listed: Vec<Value> = serde_json::from_str(&body).unwrap();
        let listed_ids: Vec<Value> = listed.into_iter().map(|p| p["id"].clone()).collect();
        assert_eq!(listed_ids, ids);

        let (status, _) = send(&app, "POST", "/api/products", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let app = build_router(AppState::new(Arc::new(UnreachableStore)));

        let (status, body) = send(&app, "GET", "/api/products", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal server error");

        let (status, _) = send(&app, "POST", "/api/product", Some(chair(json!(3)))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        // validation still wins over the store
        let (status, _) = send(&app, "POST", "/api/product", Some(chair(json!(0)))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_health() {
        let app = app();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        let health: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["status"], "ok");
    }
}
