//! Boutique Domain Library
//!
//! Core domain types and interfaces for the Furniture Boutique product catalog.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Product, NewProduct)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use boutique::{NewProduct, Product, ProductRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, NewProduct, Product, MISSING_FIELDS_MESSAGE};
pub use ports::ProductRepository;
