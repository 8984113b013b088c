// ============================================================================
// Menu Core - Menu Item Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! Menu item listing, lookup, and write flows

use std::sync::Arc;

use menu_shared::config::{ListingSettings, ValidationSettings};
use menu_shared::EntityId;
use tracing::{info, warn};

use crate::domain::{Category, MenuItem};
use crate::error::DomainError;
use crate::listing::{MenuQuery, MenuQueryParams, Page};
use crate::repositories::{CategoryRepository, MenuItemRepository};
use crate::validation::{MenuItemValidator, RawMenuItem};

/// Menu item service over the repository ports
pub struct MenuService {
    items: Arc<dyn MenuItemRepository>,
    categories: Arc<dyn CategoryRepository>,
    listing: ListingSettings,
    validator: MenuItemValidator,
}

impl MenuService {
    pub fn new(
        items: Arc<dyn MenuItemRepository>,
        categories: Arc<dyn CategoryRepository>,
        listing: ListingSettings,
        validation: ValidationSettings,
    ) -> Self {
        Self {
            items,
            categories,
            listing,
            validator: MenuItemValidator::new(validation),
        }
    }

    /// Filtered, ordered, paginated listing.
    ///
    /// Parameters are parsed before the snapshot is read so malformed
    /// requests never touch the store.
    pub async fn list(&self, params: &MenuQueryParams) -> Result<Page<MenuItem>, DomainError> {
        let query = MenuQuery::from_params(params, &self.listing)?;
        let snapshot = self.items.find_all().await?;
        Ok(query.apply(snapshot))
    }

    /// Every menu item in id order, unpaginated.
    pub async fn list_all(&self) -> Result<Vec<MenuItem>, DomainError> {
        let mut items = self.items.find_all().await?;
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    pub async fn get(&self, id: EntityId) -> Result<MenuItem, DomainError> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MenuItemNotFound(id))
    }

    pub async fn create(&self, raw: RawMenuItem) -> Result<MenuItem, DomainError> {
        let category = self.resolve_category(&raw).await?;
        let new_item = self
            .validator
            .validate(&raw, category.as_ref())
            .map_err(|report| {
                warn!("Menu item rejected: {}", report);
                DomainError::Validation(report)
            })?;

        let created = self.items.create(&new_item).await?;
        info!("Menu item created: {} ({})", created.id, created.title);
        Ok(created)
    }

    /// Replaces a menu item. With `partial`, fields missing from `raw` keep
    /// their stored values.
    pub async fn update(
        &self,
        id: EntityId,
        raw: RawMenuItem,
        partial: bool,
    ) -> Result<MenuItem, DomainError> {
        let raw = if partial {
            let existing = self.get(id).await?;
            raw.merged_over(&existing)
        } else {
            raw
        };

        let category = self.resolve_category(&raw).await?;
        let new_item = self
            .validator
            .validate(&raw, category.as_ref())
            .map_err(|report| {
                warn!("Menu item {} update rejected: {}", id, report);
                DomainError::Validation(report)
            })?;

        let updated = self
            .items
            .update(id, &new_item)
            .await?
            .ok_or(DomainError::MenuItemNotFound(id))?;
        info!("Menu item updated: {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        if !self.items.delete(id).await? {
            return Err(DomainError::MenuItemNotFound(id));
        }
        info!("Menu item deleted: {}", id);
        Ok(())
    }

    async fn resolve_category(&self, raw: &RawMenuItem) -> Result<Option<Category>, DomainError> {
        match raw.category_id() {
            Some(id) => self.categories.find_by_id(id).await,
            None => Ok(None),
        }
    }
}
