//! Application-wide constants

pub const DEFAULT_PAGE_SIZE: u32 = 2;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_THROTTLE_PER_MINUTE: u32 = 10;
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 900;
pub const MAX_TITLE_LENGTH: usize = 255;
pub const BASIC_TITLE_LENGTH: usize = 30;
pub const PRICE_MAX_DIGITS: u32 = 6;
pub const PRICE_DECIMAL_PLACES: u32 = 2;
/// Minimum accepted menu item price, as a decimal string.
pub const DEFAULT_MIN_PRICE: &str = "2.00";
/// Multiplier applied to compute `price_after_tax`.
pub const TAX_RATE: &str = "1.10";
pub const MANAGER_GROUP: &str = "Manager";
