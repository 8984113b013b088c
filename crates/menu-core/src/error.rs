//! Domain errors

use menu_shared::EntityId;
use thiserror::Error;

use crate::validation::ValidationReport;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid query parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Validation error: {0}")]
    Validation(ValidationReport),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(EntityId),

    #[error("Category not found: {0}")]
    CategoryNotFound(EntityId),

    #[error("Category slug already exists: {0}")]
    CategorySlugAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
