// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// Description: Sellable product with price, stock count, and category
// ============================================================================

use menu_shared::constants::TAX_RATE;
use menu_shared::EntityId;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::Category;

/// Menu item entity, always read together with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: EntityId,
    pub title: String,
    pub price: Decimal,
    pub inventory: i32,
    pub category: Category,
}

impl MenuItem {
    /// Price with tax applied, rounded half away from zero to 2 decimal places.
    pub fn price_after_tax(&self) -> Decimal {
        let rate: Decimal = TAX_RATE.parse().unwrap_or(Decimal::ONE);
        (self.price * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn category_id(&self) -> EntityId {
        self.category.id
    }
}

/// Validated write payload for creating or replacing a menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub title: String,
    pub price: Decimal,
    pub inventory: i32,
    pub category_id: EntityId,
}
