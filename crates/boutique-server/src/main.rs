use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;

use adapters::{InMemoryProductRepository, PgProductRepository};
use application::ProductService;
use boutique::ProductRepository;

/// Application service over whichever store backend was selected at startup
pub type AppProductService = ProductService<dyn ProductRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<AppProductService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self {
            product_service: Arc::new(ProductService::new(repo)),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Service liveness
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheck)
    ),
    tag = "Health"
)]
async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Boutique API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router around the given state
pub fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::product::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🪑 Boutique API initializing...");

    // The store connection is established once here and shared by every request
    let repo: Arc<dyn ProductRepository> = match secrets.get("STORE_BACKEND").as_deref() {
        Some("memory") => {
            tracing::warn!("⚠️  STORE_BACKEND=memory - products are lost on restart");
            Arc::new(InMemoryProductRepository::new())
        }
        _ => {
            sqlx::migrate!()
                .run(&pool)
                .await
                .expect("Failed to run database migrations");

            tracing::info!("✅ Database migrations completed");
            Arc::new(PgProductRepository::new(pool))
        }
    };

    let router = build_router(AppState::new(repo));

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Boutique API ready");

    Ok(router.into())
}
