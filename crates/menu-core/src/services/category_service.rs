// ============================================================================
// Menu Core - Category Service
// File: crates/menu-core/src/services/category_service.rs
// ============================================================================
//! Category lookup and creation

use std::sync::Arc;

use menu_shared::EntityId;
use tracing::{info, warn};

use crate::domain::{Category, NewCategory};
use crate::error::DomainError;
use crate::repositories::CategoryRepository;
use crate::validation::{FieldError, ValidationReport};

const CATEGORY_FIELDS: &[&str] = &["slug", "title"];

pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn list(&self) -> Result<Vec<Category>, DomainError> {
        self.categories.find_all().await
    }

    pub async fn get(&self, id: EntityId) -> Result<Category, DomainError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CategoryNotFound(id))
    }

    pub async fn create(&self, slug: String, title: String) -> Result<Category, DomainError> {
        let new_category = NewCategory::new(slug, title).map_err(|errors| {
            let report = ValidationReport::from_validator(&errors, CATEGORY_FIELDS);
            warn!("Category rejected: {}", report);
            DomainError::Validation(report)
        })?;

        if self
            .categories
            .find_by_slug(&new_category.slug)
            .await?
            .is_some()
        {
            warn!("Category slug already exists: {}", new_category.slug);
            return Err(DomainError::Validation(ValidationReport::single(
                FieldError::new("slug", "unique", "category with this slug already exists."),
            )));
        }

        let created = self.categories.create(&new_category).await?;
        info!("Category created: {} ({})", created.id, created.slug);
        Ok(created)
    }
}
