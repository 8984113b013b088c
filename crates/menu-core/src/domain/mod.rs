//! # Menu Core - Domain Module
//! 
//! Domain entities for the menu API.

pub mod category;
pub mod menu_item;

// Re-export all entities
pub use category::{Category, NewCategory};
pub use menu_item::{MenuItem, NewMenuItem};
