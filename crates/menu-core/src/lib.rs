//! # Menu Core
//! 
//! Domain entities, the listing query pipeline, write validation,
//! repository traits, and services for the menu API.

pub mod domain;
pub mod error;
pub mod listing;
pub mod repositories;
pub mod services;
pub mod validation;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use listing::{MenuQuery, MenuQueryParams, Page};
pub use validation::{FieldError, ValidationReport};
