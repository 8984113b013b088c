//! HTTP handlers

pub mod categories;
pub mod health;
pub mod menu_items;
pub mod protected;
