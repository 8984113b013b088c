//! # Menu Infrastructure
//! 
//! Database and in-memory implementations of the repository ports (adapters).

pub mod database;
pub mod memory;

pub use database::{create_pool, run_migrations, PgCategoryRepository, PgMenuItemRepository};
pub use memory::InMemoryMenuStore;
