//! Category repository trait (port)

use async_trait::async_trait;
use menu_shared::EntityId;

use crate::domain::{Category, NewCategory};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Category>, DomainError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError>;
    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError>;
}
