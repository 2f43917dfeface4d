//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and storage. Adapters implement these ports.
//!
//! - `ProductRepository` - Registered-item catalog (read + staged writes)
//! - `ShoppingRepository` - Current list and shopping history
//! - `UnitOfWork` - Commit point for staged writes
//! - `UnitOfWorkFactory` - Opens one `StorageScope` per use case invocation

mod product_repository;
mod repository_error;
mod shopping_repository;
mod unit_of_work;

pub use product_repository::ProductRepository;
pub use repository_error::RepositoryError;
pub use shopping_repository::ShoppingRepository;
pub use unit_of_work::{StorageScope, UnitOfWork, UnitOfWorkFactory};
