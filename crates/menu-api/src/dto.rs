//! Serialized shapes for menu items and categories

use menu_core::domain::{Category, MenuItem};
use menu_shared::constants::BASIC_TITLE_LENGTH;
use menu_shared::EntityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: EntityId,
    pub slug: String,
    pub title: String,
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            slug: category.slug.clone(),
            title: category.title.clone(),
        }
    }
}

/// Full menu item shape with the category embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDto {
    pub id: EntityId,
    pub title: String,
    pub price: String,
    pub stock: i32,
    pub price_after_tax: String,
    pub category: CategoryDto,
}

impl From<&MenuItem> for MenuItemDto {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            price: money(item.price),
            stock: item.inventory,
            price_after_tax: money(item.price_after_tax()),
            category: CategoryDto::from(&item.category),
        }
    }
}

/// Compact menu item shape; titles are cut to 30 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemBasicDto {
    pub id: EntityId,
    pub title: String,
    pub price: String,
    pub inventory: i32,
}

impl From<&MenuItem> for MenuItemBasicDto {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            title: item.title.chars().take(BASIC_TITLE_LENGTH).collect(),
            price: money(item.price),
            inventory: item.inventory,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
