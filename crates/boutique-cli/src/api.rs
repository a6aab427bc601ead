//! Boutique API Client

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use uuid::Uuid;

use boutique::Product;

use crate::flow::ProductDeleter;

/// API Client for the Boutique catalog
pub struct BoutiqueClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request Types
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub media_url: String,
}

impl BoutiqueClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all Products
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/api/products", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Boutique API")?;

        let products: Vec<Product> = ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(products)
    }

    /// Get a specific Product (`None` when the catalog has no such id)
    pub async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        let url = self.product_url(id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Boutique API")?;

        let product: Option<Product> = ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(product)
    }

    /// Create a Product
    pub async fn create_product(&self, request: &CreateProductRequest) -> Result<Product> {
        let url = format!("{}/api/product", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to connect to Boutique API")?;

        let product: Product = ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(product)
    }

    fn product_url(&self, id: Uuid) -> String {
        format!(
            "{}/api/product?id={}",
            self.base_url,
            urlencoding::encode(&id.to_string())
        )
    }
}

#[async_trait]
impl ProductDeleter for BoutiqueClient {
    async fn delete_product(&self, id: Uuid) -> Result<()> {
        let url = self.product_url(id);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to connect to Boutique API")?;

        ensure_success(resp).await?;
        Ok(())
    }
}

async fn ensure_success(resp: Response) -> Result<Response> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }
    Ok(resp)
}
