//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CreateProductRequest, ProductResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::health_check,
        // Product endpoints
        super::product::get_product,
        super::product::create_product,
        super::product::delete_product,
        super::product::list_products,
    ),
    info(
        title = "Boutique API",
        version = "0.1.0",
        description = "Furniture Boutique product catalog API",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Product", description = "Product - Catalog entries"),
    ),
    components(
        schemas(
            // Health
            crate::HealthCheck,
            // Product
            CreateProductRequest,
            ProductResponse,
        )
    ),
)]
pub struct ApiDoc;
