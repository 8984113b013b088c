//! Page slicing with an empty-page policy for out-of-range requests

use menu_shared::config::ListingSettings;
use menu_shared::PageMeta;
use serde::Serialize;

use crate::error::DomainError;

/// Requested page, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: i64,
    pub per_page: u32,
}

impl PageRequest {
    /// Parses the raw `page` and `perpage` values. Blank values fall back to
    /// the defaults; `perpage` above the configured maximum is clamped.
    pub fn parse(
        page: Option<&str>,
        perpage: Option<&str>,
        settings: &ListingSettings,
    ) -> Result<Self, DomainError> {
        let per_page = match non_blank(perpage) {
            None => settings.default_per_page,
            Some(raw) => {
                let value: i64 = raw.parse().map_err(|_| {
                    DomainError::invalid_parameter("perpage", format!("'{raw}' is not an integer"))
                })?;
                if value < 1 {
                    return Err(DomainError::invalid_parameter(
                        "perpage",
                        "must be a positive integer",
                    ));
                }
                u32::try_from(value).unwrap_or(u32::MAX)
            }
        };

        let number = match non_blank(page) {
            None => 1,
            Some(raw) => raw.parse().map_err(|_| {
                DomainError::invalid_parameter("page", format!("'{raw}' is not an integer"))
            })?,
        };

        Ok(Self {
            number,
            per_page: per_page.clamp(1, settings.max_per_page.max(1)),
        })
    }

    /// Slices an ordered sequence. Pages below 1 or past the end are empty.
    pub fn slice<T>(&self, items: Vec<T>) -> Page<T> {
        let total_items = items.len();
        let per_page = self.per_page as usize;
        let total_pages = total_items.div_ceil(per_page);

        let in_range = self.number >= 1 && (self.number as u64) <= total_pages as u64;
        let items = if in_range {
            let start = (self.number as usize - 1) * per_page;
            items.into_iter().skip(start).take(per_page).collect()
        } else {
            Vec::new()
        };

        Page {
            items,
            number: self.number,
            per_page: self.per_page,
            total_items,
            total_pages,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// One page of results in final order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: i64,
    pub per_page: u32,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            page: self.number,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
