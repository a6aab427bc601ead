//! PostgreSQL Repository Implementations

mod product_repository;

pub use product_repository::PgProductRepository;
