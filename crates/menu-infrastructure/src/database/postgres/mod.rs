//! PostgreSQL repository implementations

pub mod category_repo_impl;
pub mod menu_item_repo_impl;

pub use category_repo_impl::PgCategoryRepository;
pub use menu_item_repo_impl::PgMenuItemRepository;
