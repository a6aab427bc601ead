//! In-memory implementation of ProductRepository
//!
//! Keeps products in insertion order behind an async lock. Nothing survives
//! a restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use boutique::{DomainError, NewProduct, Product, ProductRepository};

/// In-memory implementation of ProductRepository
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.read().await.clone())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let product = product.clone().into_product(Uuid::new_v4());
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}
