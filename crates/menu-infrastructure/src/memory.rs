// ============================================================================
// Menu Infrastructure - In-Memory Store
// File: crates/menu-infrastructure/src/memory.rs
// Description: Process-local adapter for both repository ports
// ============================================================================

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::info;

use menu_core::domain::{Category, MenuItem, NewCategory, NewMenuItem};
use menu_core::error::DomainError;
use menu_core::repositories::{CategoryRepository, MenuItemRepository};
use menu_core::validation::{FieldError, ValidationReport};
use menu_shared::EntityId;

#[derive(Debug, Clone)]
struct StoredItem {
    title: String,
    price: Decimal,
    inventory: i32,
    category_id: EntityId,
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<EntityId, Category>,
    items: BTreeMap<EntityId, StoredItem>,
    next_category_id: EntityId,
    next_item_id: EntityId,
}

impl Tables {
    fn join(&self, id: EntityId, stored: &StoredItem) -> Option<MenuItem> {
        let category = self.categories.get(&stored.category_id)?.clone();
        Some(MenuItem {
            id,
            title: stored.title.clone(),
            price: stored.price,
            inventory: stored.inventory,
            category,
        })
    }

    fn check_category(&self, item: &NewMenuItem) -> Result<(), DomainError> {
        if self.categories.contains_key(&item.category_id) {
            return Ok(());
        }
        Err(DomainError::Validation(ValidationReport::single(FieldError::new(
            "category_id",
            "does_not_exist",
            format!("Invalid pk \"{}\" - object does not exist.", item.category_id),
        ))))
    }
}

/// Menu store held in process memory. Ids are assigned from 1 upwards,
/// like a SERIAL column.
#[derive(Debug, Default)]
pub struct InMemoryMenuStore {
    tables: RwLock<Tables>,
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a category directly, bypassing slug validation.
    pub fn seed_category(&self, slug: &str, title: &str) -> Category {
        let mut tables = self.tables.write();
        tables.next_category_id += 1;
        let category = Category {
            id: tables.next_category_id,
            slug: slug.to_string(),
            title: title.to_string(),
        };
        tables.categories.insert(category.id, category.clone());
        category
    }

    /// Inserts a menu item directly. Returns `None` when the category is unknown.
    pub fn seed_item(
        &self,
        title: &str,
        price: Decimal,
        inventory: i32,
        category_id: EntityId,
    ) -> Option<MenuItem> {
        let mut tables = self.tables.write();
        if !tables.categories.contains_key(&category_id) {
            return None;
        }
        tables.next_item_id += 1;
        let id = tables.next_item_id;
        let stored = StoredItem {
            title: title.to_string(),
            price,
            inventory,
            category_id,
        };
        let item = tables.join(id, &stored);
        tables.items.insert(id, stored);
        item
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryMenuStore {
    async fn find_all(&self) -> Result<Vec<MenuItem>, DomainError> {
        let tables = self.tables.read();
        Ok(tables
            .items
            .iter()
            .filter_map(|(id, stored)| tables.join(*id, stored))
            .collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<MenuItem>, DomainError> {
        let tables = self.tables.read();
        Ok(tables.items.get(&id).and_then(|stored| tables.join(id, stored)))
    }

    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DomainError> {
        let mut tables = self.tables.write();
        tables.check_category(item)?;

        tables.next_item_id += 1;
        let id = tables.next_item_id;
        let stored = StoredItem {
            title: item.title.clone(),
            price: item.price,
            inventory: item.inventory,
            category_id: item.category_id,
        };
        let created = tables
            .join(id, &stored)
            .ok_or_else(|| DomainError::InternalError(format!("category {} vanished", item.category_id)))?;
        tables.items.insert(id, stored);

        info!("Menu item stored in memory: {}", id);
        Ok(created)
    }

    async fn update(&self, id: EntityId, item: &NewMenuItem) -> Result<Option<MenuItem>, DomainError> {
        let mut tables = self.tables.write();
        if !tables.items.contains_key(&id) {
            return Ok(None);
        }
        tables.check_category(item)?;

        let stored = StoredItem {
            title: item.title.clone(),
            price: item.price,
            inventory: item.inventory,
            category_id: item.category_id,
        };
        let updated = tables.join(id, &stored);
        tables.items.insert(id, stored);
        Ok(updated)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        Ok(self.tables.write().items.remove(&id).is_some())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryMenuStore {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.tables.read().categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Category>, DomainError> {
        Ok(self.tables.read().categories.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError> {
        Ok(self
            .tables
            .read()
            .categories
            .values()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError> {
        let mut tables = self.tables.write();
        if tables.categories.values().any(|c| c.slug == category.slug) {
            return Err(DomainError::CategorySlugAlreadyExists(category.slug.clone()));
        }

        tables.next_category_id += 1;
        let created = Category {
            id: tables.next_category_id,
            slug: category.slug.clone(),
            title: category.title.clone(),
        };
        tables.categories.insert(created.id, created.clone());
        Ok(created)
    }
}
