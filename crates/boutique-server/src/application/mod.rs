//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the HTTP layer and repositories.

mod product_service;

pub use product_service::{ProductOperation, ProductOutcome, ProductService};
