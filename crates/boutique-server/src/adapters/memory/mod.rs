//! In-memory Repository Implementations

mod product_repository;

pub use product_repository::InMemoryProductRepository;
