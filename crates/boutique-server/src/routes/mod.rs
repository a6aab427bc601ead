//! Boutique API Routes
//!
//! - /api/product - Product lookup, creation and deletion (method-routed)
//! - /api/products - Product listing

pub mod product;
pub mod swagger;
