//! Menu item repository trait (port)

use async_trait::async_trait;
use menu_shared::EntityId;

use crate::domain::{MenuItem, NewMenuItem};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Consistent snapshot of every menu item with its category.
    async fn find_all(&self) -> Result<Vec<MenuItem>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<MenuItem>, DomainError>;
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DomainError>;
    async fn update(&self, id: EntityId, item: &NewMenuItem) -> Result<Option<MenuItem>, DomainError>;
    /// Returns `false` when no row matched.
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
}
