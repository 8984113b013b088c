//! Menu listing query pipeline.
//!
//! Stages run in a fixed order over an already-fetched snapshot:
//! category filter, price ceiling, title search, ordering, pagination.

pub mod ordering;
pub mod pagination;
pub mod query;

pub use ordering::{Direction, OrderingKey, SortField};
pub use pagination::{Page, PageRequest};
pub use query::{MenuQuery, MenuQueryParams};
