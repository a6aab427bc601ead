//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Product: A catalog entry as stored
//! - NewProduct: Validated fields of a product awaiting an id

mod product;

pub use product::*;
