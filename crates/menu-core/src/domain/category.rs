// ============================================================================
// Menu Core - Category Entity
// File: crates/menu-core/src/domain/category.rs
// Description: Named grouping of menu items
// ============================================================================

use menu_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub slug: String,
    pub title: String,
}

/// Validated payload for a category that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewCategory {
    #[validate(
        length(min = 1, max = 50, message = "Slug must be between 1 and 50 characters"),
        custom(function = "validate_slug")
    )]
    pub slug: String,

    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
}

impl NewCategory {
    pub fn new(slug: String, title: String) -> Result<Self, validator::ValidationErrors> {
        let category = Self {
            slug: slug.trim().to_string(),
            title: title.trim().to_string(),
        };

        category.validate()?;
        Ok(category)
    }
}

fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_slug");
        error.message = Some(
            "Enter a valid slug consisting of lowercase letters, numbers, underscores or hyphens."
                .into(),
        );
        Err(error)
    }
}
