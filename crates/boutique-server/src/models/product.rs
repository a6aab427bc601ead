//! Product - Catalog Entry DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use boutique::Product;

// ============================================
// Request/Response DTOs
// ============================================

/// Create Product request
///
/// Documents the expected shape only. The handler reads the raw JSON body so
/// that missing and falsy fields are both reported as 422.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[schema(example = "Chair")]
    pub name: String,
    #[schema(example = 49.99)]
    pub price: f64,
    #[schema(example = "Oak chair")]
    pub description: String,
    #[schema(example = "http://x/chair.png")]
    pub media_url: String,
}

/// Product response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub media_url: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
            media_url: product.media_url,
        }
    }
}

/// Product lookup query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Product ID
    pub id: Option<String>,
    /// Product ID under the storefront's legacy parameter name
    #[serde(rename = "_id")]
    pub legacy_id: Option<String>,
}

impl ProductQuery {
    /// Collect from raw query pairs. The first value of each key wins, so a
    /// repeated parameter never fails the request.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "id" => &mut query.id,
                "_id" => &mut query.legacy_id,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    pub fn into_id(self) -> Option<String> {
        self.id.or(self.legacy_id)
    }
}
