//! Query parameter parsing and the filter → order → paginate run

use menu_shared::config::ListingSettings;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use super::ordering::{sort_items, OrderingKey, SortField};
use super::pagination::{Page, PageRequest};
use crate::domain::MenuItem;
use crate::error::DomainError;

/// Raw listing parameters as they arrive on the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuQueryParams {
    pub category: Option<String>,
    pub to_price: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub perpage: Option<String>,
    pub page: Option<String>,
}

/// Parsed listing query, ready to run against a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub to_price: Option<Decimal>,
    pub search: Option<String>,
    pub ordering: Vec<OrderingKey>,
    pub page: PageRequest,
}

impl MenuQuery {
    pub fn from_params(
        params: &MenuQueryParams,
        settings: &ListingSettings,
    ) -> Result<Self, DomainError> {
        let to_price = match present(&params.to_price) {
            None => None,
            Some(raw) => Some(raw.trim().parse::<Decimal>().map_err(|_| {
                DomainError::invalid_parameter("to_price", format!("'{raw}' is not a number"))
            })?),
        };

        let ordering = match present(&params.ordering) {
            None => vec![OrderingKey::ascending(SortField::Price)],
            Some(raw) => OrderingKey::parse_list(raw)?,
        };

        let page = PageRequest::parse(
            params.page.as_deref(),
            params.perpage.as_deref(),
            settings,
        )?;

        Ok(Self {
            category: present(&params.category).map(str::to_string),
            to_price,
            search: present(&params.search).map(str::to_string),
            ordering,
            page,
        })
    }

    /// Runs every stage over `items`. Never fails: a page outside the
    /// result set comes back empty.
    pub fn apply(&self, items: Vec<MenuItem>) -> Page<MenuItem> {
        let total = items.len();
        let mut matched: Vec<MenuItem> = items
            .into_iter()
            .filter(|item| self.matches_category(item))
            .filter(|item| self.matches_price(item))
            .filter(|item| self.matches_search(item))
            .collect();

        sort_items(&mut matched, &self.ordering);
        debug!("Listing query matched {} of {} menu items", matched.len(), total);

        self.page.slice(matched)
    }

    fn matches_category(&self, item: &MenuItem) -> bool {
        self.category
            .as_deref()
            .map_or(true, |title| item.category.title == title)
    }

    fn matches_price(&self, item: &MenuItem) -> bool {
        self.to_price.map_or(true, |ceiling| item.price <= ceiling)
    }

    fn matches_search(&self, item: &MenuItem) -> bool {
        self.search
            .as_deref()
            .map_or(true, |needle| item.title.contains(needle))
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
