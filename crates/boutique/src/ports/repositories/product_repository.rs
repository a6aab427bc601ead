//! Product Repository Port
//!
//! Abstract interface for Product persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, NewProduct, Product};

/// Repository interface for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a Product by ID (`None` when absent)
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Find all Products in the store's natural order
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Insert a Product; the store assigns its ID
    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError>;

    /// Delete a Product by ID. Returns whether a record was removed;
    /// deleting an unknown ID is not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError>;
}
