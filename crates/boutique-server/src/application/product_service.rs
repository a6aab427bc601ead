//! Product Application Service (Use Case)
//!
//! Validates requests and dispatches them to the ProductRepository.

use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use boutique::{DomainError, NewProduct, Product, ProductRepository};

/// An incoming product request, classified by operation kind
#[derive(Debug)]
pub enum ProductOperation {
    Get { id: Option<String> },
    List,
    Create { payload: Value },
    Delete { id: Option<String> },
    Unsupported { method: String },
}

/// Result of a successfully handled operation
#[derive(Debug)]
pub enum ProductOutcome {
    /// `None` when no product has the requested id
    Found(Option<Product>),
    Listed(Vec<Product>),
    Created(Product),
    Deleted,
}

/// Application service for Product operations
pub struct ProductService<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Single entry point: dispatch an operation to its handler
    pub async fn handle(
        &self,
        operation: ProductOperation,
    ) -> Result<ProductOutcome, DomainError> {
        match operation {
            ProductOperation::Get { id } => {
                self.get(id.as_deref()).await.map(ProductOutcome::Found)
            }
            ProductOperation::List => self.list_all().await.map(ProductOutcome::Listed),
            ProductOperation::Create { payload } => {
                self.create(&payload).await.map(ProductOutcome::Created)
            }
            ProductOperation::Delete { id } => {
                self.delete(id.as_deref()).await?;
                Ok(ProductOutcome::Deleted)
            }
            ProductOperation::Unsupported { method } => {
                Err(DomainError::unsupported_method(method))
            }
        }
    }

    /// Get a Product by ID. Missing or malformed ids match nothing.
    pub async fn get(&self, id: Option<&str>) -> Result<Option<Product>, DomainError> {
        match parse_id(id) {
            Some(id) => self.repo.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Get all Products
    pub async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        self.repo.find_all().await
    }

    /// Validate a create payload and store the new Product
    pub async fn create(&self, payload: &Value) -> Result<Product, DomainError> {
        let new_product = NewProduct::from_payload(payload)?;
        let product = self.repo.create(&new_product).await?;

        tracing::info!("Created Product: {} ({})", product.name, product.id);

        Ok(product)
    }

    /// Delete a Product. Succeeds whether or not the record existed.
    pub async fn delete(&self, id: Option<&str>) -> Result<(), DomainError> {
        let Some(id) = parse_id(id) else {
            return Ok(());
        };

        if self.repo.delete_by_id(id).await? {
            tracing::info!("Deleted Product: {}", id);
        }
        Ok(())
    }
}

fn parse_id(id: Option<&str>) -> Option<Uuid> {
    id.and_then(|raw| Uuid::parse_str(raw.trim()).ok())
}
