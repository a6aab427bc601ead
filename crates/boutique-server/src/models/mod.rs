//! Boutique Data Models
//!
//! - Product: Catalog entry request/response shapes

mod product;

pub use product::*;
