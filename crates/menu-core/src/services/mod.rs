//! Domain services (business logic)

pub mod category_service;
pub mod menu_service;

pub use category_service::CategoryService;
pub use menu_service::MenuService;
