//! Common types

use serde::{Deserialize, Serialize};

pub type EntityId = i32;

/// How write payloads report field failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStrategy {
    /// Every failing field is reported together.
    #[default]
    CollectAll,
    /// Validation stops at the first failing field.
    FailFast,
}

/// Pagination metadata returned alongside a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: i64,
    pub per_page: u32,
    pub total_items: usize,
    pub total_pages: usize,
}
